use sqlx::FromRow;

/// One row of the region-to-area LEFT JOIN used to assemble the nested
/// hierarchy; area columns are NULL for regions without areas. The region
/// named "Bölgelendirme" holds the flat zoning list and is excluded from
/// the general hierarchy.
#[derive(Debug, Clone, FromRow)]
pub struct RegionAreaRow {
    pub id: i64,
    pub name: String,
    pub area_id: Option<i64>,
    pub area_name: Option<String>,
}
