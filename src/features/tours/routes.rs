use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::tours::handlers;
use crate::features::tours::services::{TourPersistenceService, TourQueryService};

/// Shared state for the tours feature: write and read services
#[derive(Clone)]
pub struct ToursState {
    pub persistence: Arc<TourPersistenceService>,
    pub query: Arc<TourQueryService>,
}

/// Create routes for the tours feature
pub fn routes(persistence: Arc<TourPersistenceService>, query: Arc<TourQueryService>) -> Router {
    Router::new()
        .route("/tours/save", post(handlers::save_tours))
        .route("/tours/{company_ref}", get(handlers::get_tours))
        .with_state(ToursState { persistence, query })
}
