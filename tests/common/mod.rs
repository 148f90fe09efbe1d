#![allow(dead_code)]

use catalog_store::config::Tables;
use catalog_store::infrastructure::AppState;
use catalog_store::models::{BrandInput, CategoryInput, ImageInput, ProductInput};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE brands (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        image TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_id INTEGER NOT NULL REFERENCES categories(id),
        brand_id INTEGER NOT NULL REFERENCES brands(id),
        title TEXT NOT NULL,
        code TEXT NOT NULL,
        description TEXT NOT NULL,
        stock INTEGER NOT NULL,
        minStock INTEGER NOT NULL,
        maxStock INTEGER NOT NULL,
        available BOOLEAN NOT NULL,
        unitCost REAL NOT NULL,
        unitPrice REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE images (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER NOT NULL REFERENCES products(id),
        url TEXT NOT NULL,
        description TEXT NOT NULL
    )
    "#,
];

// Helper to create an in-memory catalog database
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect");

    for ddl in SCHEMA {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            ddl.to_string(),
        ))
        .await
        .expect("Failed to create table");
    }

    db
}

pub async fn setup_test_state() -> AppState {
    AppState::new(setup_test_db().await, &Tables::default())
}

pub async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            format!("SELECT COUNT(*) AS n FROM {}", table),
        ))
        .await
        .expect("Count failed")
        .expect("No count row");
    row.try_get("", "n").expect("Bad count column")
}

pub fn category(name: &str, description: &str) -> CategoryInput {
    CategoryInput {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
    }
}

pub fn brand(name: &str) -> BrandInput {
    BrandInput {
        name: Some(name.to_string()),
        image: Some(format!("https://cdn.example.com/brands/{}.png", name.to_lowercase())),
    }
}

pub fn product(category_id: i32, brand_id: i32, code: &str, title: &str) -> ProductInput {
    ProductInput {
        category_id: Some(category_id),
        brand_id: Some(brand_id),
        title: Some(title.to_string()),
        code: Some(code.to_string()),
        description: Some(format!("{} description", title)),
        stock: Some(10),
        min_stock: Some(2),
        max_stock: Some(50),
        available: Some(true),
        unit_cost: Some(4.5),
        unit_price: Some(9.99),
    }
}

pub fn image(product_id: i32, url: &str) -> ImageInput {
    ImageInput {
        product_id: Some(product_id),
        url: Some(url.to_string()),
        description: Some("Front view".to_string()),
    }
}
