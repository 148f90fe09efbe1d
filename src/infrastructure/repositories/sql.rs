//! Statement text for the repository protocol
//!
//! Only identifiers drawn from configuration and entity schemas are
//! interpolated; every value travels as a bound parameter.

use sea_orm::DbBackend;

pub fn quote(backend: DbBackend, ident: &str) -> String {
    match backend {
        DbBackend::MySql => format!("`{}`", ident.replace('`', "``")),
        DbBackend::Sqlite | DbBackend::Postgres => format!("\"{}\"", ident.replace('"', "\"\"")),
    }
}

pub fn select(backend: DbBackend, table: &str, key: Option<&str>) -> String {
    let table = quote(backend, table);
    match key {
        Some(key) => format!("SELECT * FROM {} WHERE {} = ?", table, quote(backend, key)),
        None => format!("SELECT * FROM {}", table),
    }
}

pub fn insert(backend: DbBackend, table: &str, columns: &[&str]) -> String {
    let names: Vec<String> = columns.iter().map(|c| quote(backend, c)).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(backend, table),
        names.join(", "),
        placeholders
    )
}

pub fn update(backend: DbBackend, table: &str, columns: &[&str]) -> String {
    let assignments: Vec<String> = columns
        .iter()
        .map(|c| format!("{} = ?", quote(backend, c)))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quote(backend, table),
        assignments.join(", "),
        quote(backend, "id")
    )
}

pub fn delete(backend: DbBackend, table: &str, key: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {} = ?",
        quote(backend, table),
        quote(backend, key)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_statements() {
        assert_eq!(
            select(DbBackend::Sqlite, "categories", None),
            r#"SELECT * FROM "categories""#
        );
        assert_eq!(
            select(DbBackend::MySql, "products", Some("code")),
            "SELECT * FROM `products` WHERE `code` = ?"
        );
    }

    #[test]
    fn test_insert_lists_every_column() {
        assert_eq!(
            insert(DbBackend::MySql, "brands", &["name", "image"]),
            "INSERT INTO `brands` (`name`, `image`) VALUES (?, ?)"
        );
    }

    #[test]
    fn test_update_binds_id_last() {
        assert_eq!(
            update(DbBackend::Sqlite, "products", &["minStock", "title"]),
            r#"UPDATE "products" SET "minStock" = ?, "title" = ? WHERE "id" = ?"#
        );
    }

    #[test]
    fn test_quote_escapes_delimiters() {
        assert_eq!(quote(DbBackend::MySql, "a`b"), "`a``b`");
        assert_eq!(quote(DbBackend::Sqlite, "a\"b"), "\"a\"\"b\"");
        assert_eq!(
            delete(DbBackend::Sqlite, "images", "url"),
            r#"DELETE FROM "images" WHERE "url" = ?"#
        );
    }
}
