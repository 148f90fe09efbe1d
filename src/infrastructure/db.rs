//! Connection pool construction
//!
//! The pool is the query executor every repository shares. Each statement
//! checks out a connection for its own duration only.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};

use crate::infrastructure::config::Config;

pub async fn init_db(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    match db.get_database_backend() {
        DbBackend::Sqlite | DbBackend::MySql => {
            tracing::info!(
                "Connected to {:?} database (pool size {})",
                db.get_database_backend(),
                config.max_connections
            );
            Ok(db)
        }
        DbBackend::Postgres => Err(DbErr::Custom(
            "Unsupported database backend: Postgres".to_string(),
        )),
    }
}
