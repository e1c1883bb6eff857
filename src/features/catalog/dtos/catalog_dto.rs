use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::catalog::models::{RegionAreaRow, TourListEntry};

// ==================== Request DTOs ====================

/// Request body for replacing a company's reference catalog: tour names,
/// the flat zoning list (`bolgeler`), and the general region hierarchy
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveCatalogDto {
    pub company_id: Option<String>,

    #[serde(default)]
    pub tours: Vec<NamedItemDto>,

    /// Flat zoning areas stored under the distinguished zoning region
    #[serde(default)]
    pub bolgeler: Vec<NamedItemDto>,

    #[serde(default)]
    #[validate(nested)]
    pub regions: Vec<RegionEntryDto>,
}

/// Bare named entry (tour name or area name)
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedItemDto {
    pub name: String,
}

/// Region with its nested areas
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionEntryDto {
    #[validate(length(min = 1, message = "Region name must not be empty"))]
    pub name: String,

    pub areas: Vec<NamedItemDto>,
}

// ==================== Response DTOs ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdNameDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: i64,
    pub name: String,
    pub areas: Vec<IdNameDto>,
}

/// Full reference catalog for a company
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponseDto {
    pub tours: Vec<IdNameDto>,
    pub bolgeler: Vec<IdNameDto>,
    pub regions: Vec<RegionResponseDto>,
}

impl From<TourListEntry> for IdNameDto {
    fn from(entry: TourListEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}

/// Fold the region-to-area LEFT JOIN rows (ordered by region id) into the
/// nested hierarchy. Regions without areas come through with a NULL area
/// column and end up with an empty list.
pub fn group_region_rows(rows: Vec<RegionAreaRow>) -> Vec<RegionResponseDto> {
    let mut regions: Vec<RegionResponseDto> = Vec::new();
    for row in rows {
        if regions.last().map(|r| r.id) != Some(row.id) {
            regions.push(RegionResponseDto {
                id: row.id,
                name: row.name,
                areas: Vec::new(),
            });
        }
        if let (Some(area_id), Some(area_name)) = (row.area_id, row.area_name) {
            if let Some(region) = regions.last_mut() {
                region.areas.push(IdNameDto {
                    id: area_id,
                    name: area_name,
                });
            }
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, area: Option<(i64, &str)>) -> RegionAreaRow {
        RegionAreaRow {
            id,
            name: name.to_string(),
            area_id: area.map(|(a, _)| a),
            area_name: area.map(|(_, n)| n.to_string()),
        }
    }

    #[test]
    fn test_group_region_rows_nests_areas() {
        let rows = vec![
            row(1, "Antalya", Some((10, "Kaleiçi"))),
            row(1, "Antalya", Some((11, "Lara"))),
            row(2, "Muğla", Some((12, "Bodrum"))),
        ];
        let regions = group_region_rows(rows);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].areas.len(), 2);
        assert_eq!(regions[0].areas[1].name, "Lara");
        assert_eq!(regions[1].areas.len(), 1);
    }

    #[test]
    fn test_group_region_rows_region_without_areas() {
        let rows = vec![row(3, "İzmir", None)];
        let regions = group_region_rows(rows);
        assert_eq!(regions.len(), 1);
        assert!(regions[0].areas.is_empty());
    }

    #[test]
    fn test_group_region_rows_empty() {
        assert!(group_region_rows(Vec::new()).is_empty());
    }
}
