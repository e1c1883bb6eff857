use utoipa::{Modify, OpenApi};

use crate::features::catalog::{dtos as catalog_dtos, handlers as catalog_handlers};
use crate::features::tours::{dtos as tours_dtos, handlers as tours_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Tours
        tours_handlers::save_tours,
        tours_handlers::get_tours,
        // Catalog
        catalog_handlers::save_catalog,
        catalog_handlers::get_catalog,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Tours
            tours_dtos::SaveToursDto,
            tours_dtos::TourEntryDto,
            tours_dtos::TourMainDto,
            tours_dtos::PickupTimeDto,
            tours_dtos::TourOptionDto,
            tours_dtos::SaveToursResponseDto,
            tours_dtos::TourDetailDto,
            tours_dtos::TourMainResponseDto,
            tours_dtos::PickupTimeResponseDto,
            tours_dtos::TourOptionResponseDto,
            ApiResponse<tours_dtos::SaveToursResponseDto>,
            ApiResponse<Vec<tours_dtos::TourDetailDto>>,
            // Catalog
            catalog_dtos::SaveCatalogDto,
            catalog_dtos::NamedItemDto,
            catalog_dtos::RegionEntryDto,
            catalog_dtos::IdNameDto,
            catalog_dtos::RegionResponseDto,
            catalog_dtos::CatalogResponseDto,
            ApiResponse<catalog_dtos::CatalogResponseDto>,
        )
    ),
    tags(
        (name = "tours", description = "Company tour sets with days, pickup times, and options"),
        (name = "catalog", description = "Company reference catalog: tour names, zoning list, region hierarchy"),
    ),
    info(
        title = "Tourdesk API",
        version = "0.1.0",
        description = "Tour back-office API for agency companies",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
