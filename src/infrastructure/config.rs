use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid mode '{0}', expected PRODUCTION, DEVELOPMENT or TESTING")]
    InvalidMode(String),

    #[error("invalid value for {key}: '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("table name for {key} must be a plain identifier, got '{value}'")]
    InvalidTable { key: &'static str, value: String },
}

/// Run mode, selects the dotenv file and the default log filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Production,
    Development,
    Testing,
}

impl Mode {
    pub fn env_file(self) -> &'static str {
        match self {
            Mode::Production => ".env.production.local",
            Mode::Development => ".env.development.local",
            Mode::Testing => ".env.test.local",
        }
    }

    pub fn default_log_filter(self) -> &'static str {
        match self {
            Mode::Production => "catalog_store=info",
            Mode::Development | Mode::Testing => "catalog_store=debug,tower_http=debug",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRODUCTION" => Ok(Mode::Production),
            "DEVELOPMENT" => Ok(Mode::Development),
            "TESTING" => Ok(Mode::Testing),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Production => "PRODUCTION",
            Mode::Development => "DEVELOPMENT",
            Mode::Testing => "TESTING",
        };
        f.write_str(name)
    }
}

/// Table names. Interpolated into SQL, so only identifiers are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tables {
    pub categories: String,
    pub brands: String,
    pub products: String,
    pub images: String,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            categories: "categories".to_string(),
            brands: "brands".to_string(),
            products: "products".to_string(),
            images: "images".to_string(),
        }
    }
}

/// Command line for catalog-server. Flags win over the environment.
#[derive(Debug, Default, Parser)]
#[command(name = "catalog-server", version, about = "Catalog store HTTP server")]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Run mode: PRODUCTION, DEVELOPMENT or TESTING
    #[arg(short, long, env = "CATALOG_MODE")]
    pub mode: Option<Mode>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub tables: Tables,
    pub error_log: PathBuf,
}

impl Config {
    /// Resolves the mode from `args`, loads the matching dotenv file, then the rest.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mode = args.mode.unwrap_or(Mode::Development);

        if dotenvy::from_filename(mode.env_file()).is_err() {
            tracing::debug!("No {} file, using process environment", mode.env_file());
        }

        let mut config = Self::from_lookup(mode, |key| env::var(key).ok())?;
        if let Some(port) = args.port {
            config.port = port;
        }
        Ok(config)
    }

    pub fn from_lookup(
        mode: Mode,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://catalog.db?mode=rwc".to_string());

        let max_connections = parse_number(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;
        let port = parse_number(&lookup, "PORT", 8080)?;
        let error_log = lookup("CATALOG_ERROR_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs/errors.log"));

        let defaults = Tables::default();
        let tables = Tables {
            categories: table(&lookup, "CATALOG_TABLE_CATEGORIES", defaults.categories)?,
            brands: table(&lookup, "CATALOG_TABLE_BRANDS", defaults.brands)?,
            products: table(&lookup, "CATALOG_TABLE_PRODUCTS", defaults.products)?,
            images: table(&lookup, "CATALOG_TABLE_IMAGES", defaults.images)?,
        };

        Ok(Self {
            mode,
            database_url,
            max_connections,
            port,
            tables,
            error_log,
        })
    }
}

fn parse_number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}

fn table(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: String,
) -> Result<String, ConfigError> {
    let value = lookup(key).unwrap_or(default);
    if is_identifier(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidTable { key, value })
    }
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
