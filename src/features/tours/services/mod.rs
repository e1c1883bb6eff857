mod persistence_service;
mod query_service;

pub use persistence_service::TourPersistenceService;
pub use query_service::TourQueryService;
