use serde::Serialize;
use sqlx::FromRow;

/// One of the 7 fixed weekday slots of a tour. `day_value` equals the
/// weekday number (1-7) when that weekday is selected, 0 otherwise.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourDay {
    pub id: i64,
    pub tour_id: i64,
    pub slot: i16,
    pub day_value: i16,
}
