//! Tours feature: a company's excursion products with weekly availability,
//! pickup-time slots, and priced add-on options.
//!
//! Saving is a wholesale replace: the client submits the full tour list and
//! the previous set is deleted and reinserted inside one transaction.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/tours/save` | Replace a company's entire tour set |
//! | GET | `/tours/{companyRef}` | List a company's tours with children |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{TourPersistenceService, TourQueryService};
