use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Main tour record owned by exactly one company (`company_ref`)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tour {
    pub id: i64,
    pub company_ref: String,
    pub tour_name: String,
    pub operator: String,
    pub operator_id: String,
    pub adult_price: Decimal,
    pub child_price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
