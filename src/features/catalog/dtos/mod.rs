mod catalog_dto;

pub use catalog_dto::{
    group_region_rows, CatalogResponseDto, IdNameDto, NamedItemDto, RegionEntryDto,
    RegionResponseDto, SaveCatalogDto,
};
