use serde::Serialize;
use sqlx::FromRow;

/// Company-scoped tour-name reference row, used to fill the tour name
/// dropdown in the back office
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourListEntry {
    pub id: i64,
    pub company_id: String,
    pub name: String,
}
