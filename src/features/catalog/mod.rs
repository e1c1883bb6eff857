//! Reference catalog feature: company-scoped tour-name list and the
//! region/area hierarchy, including the distinguished flat zoning region
//! ("Bölgelendirme") used as a plain tag list.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/tourlist/save` | Replace a company's reference catalog |
//! | GET | `/tourlist/{companyId}` | Fetch the catalog with nested areas |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CatalogService;
