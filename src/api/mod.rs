pub mod catalog;
pub mod error;
pub mod health;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Catalog
        .nest("/categories", catalog::routes(state.category_repo.clone()))
        .nest("/brands", catalog::routes(state.brand_repo.clone()))
        .nest("/products", catalog::routes(state.product_repo.clone()))
        .nest("/images", catalog::routes(state.image_repo.clone()))
}
