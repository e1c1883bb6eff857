use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::catalog::handlers;
use crate::features::catalog::services::CatalogService;

/// Create routes for the catalog feature
pub fn routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/tourlist/save", post(handlers::save_catalog))
        .route("/tourlist/{company_id}", get(handlers::get_catalog))
        .with_state(service)
}
