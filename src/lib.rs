//! Data-access layer for a small e-commerce catalog.
//!
//! Categories, brands, products and images share one repository protocol:
//! validate the selector or payload, check the table, then write. Expected
//! failures come back as typed [`domain::ErrorSignal`]s.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod models;

pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::server;

pub use domain::{CatalogRepository, DomainError, ErrorCode, ErrorName, ErrorSignal, WriteOutcome};
pub use infrastructure::{AppState, SqlRepository};
