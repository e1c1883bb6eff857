use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Priced add-on attached to a tour
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourOption {
    pub id: i64,
    pub tour_id: i64,
    pub name: String,
    pub price: Decimal,
}
