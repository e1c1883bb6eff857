use serde::Serialize;
use sqlx::FromRow;

/// Scheduled departure slot of a tour. Hour and minute are stored as
/// zero-padded 2-char strings, period as "1".."10".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PickupTime {
    pub id: i64,
    pub tour_id: i64,
    pub hour: String,
    pub minute: String,
    pub region: String,
    pub area: String,
    pub period: String,
    pub is_active: bool,
}
