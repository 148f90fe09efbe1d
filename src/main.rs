use std::fs::{self, OpenOptions};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{
    Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use catalog_store::config::{Args, Config};
use catalog_store::infrastructure::AppState;
use catalog_store::{db, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration (also reads the mode's dotenv file)
    let config = Config::load(&args)?;

    // Error-level records are also appended to the error log
    if let Some(dir) = config.error_log.parent() {
        fs::create_dir_all(dir)?;
    }
    let error_log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.error_log)?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.mode.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(error_log))
                .with_filter(LevelFilter::ERROR),
        )
        .init();

    tracing::info!("Starting catalog server in {} mode", config.mode);

    // Initialize the connection pool
    let db = db::init_db(&config).await?;
    let state = AppState::new(db, &config.tables);

    server::serve(state, config.port).await?;

    Ok(())
}
