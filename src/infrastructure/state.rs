//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::CatalogRepository;
use crate::infrastructure::SqlRepository;
use crate::infrastructure::config::Tables;
use crate::models::{Brand, Category, Image, Product};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection, the query executor behind every repository
    db: DatabaseConnection,
    /// Category repository
    pub category_repo: Arc<dyn CatalogRepository<Category>>,
    /// Brand repository
    pub brand_repo: Arc<dyn CatalogRepository<Brand>>,
    /// Product repository
    pub product_repo: Arc<dyn CatalogRepository<Product>>,
    /// Image repository
    pub image_repo: Arc<dyn CatalogRepository<Image>>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, tables: &Tables) -> Self {
        let category_repo =
            Arc::new(SqlRepository::<Category>::new(db.clone(), &tables.categories));
        let brand_repo = Arc::new(SqlRepository::<Brand>::new(db.clone(), &tables.brands));
        let product_repo = Arc::new(SqlRepository::<Product>::new(db.clone(), &tables.products));
        let image_repo = Arc::new(SqlRepository::<Image>::new(db.clone(), &tables.images));

        Self {
            db,
            category_repo,
            brand_repo,
            product_repo,
            image_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
