use serde::Serialize;
use sqlx::FromRow;

/// Area belonging to exactly one region
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Area {
    pub id: i64,
    pub company_id: String,
    pub region_id: i64,
    pub name: String,
}
