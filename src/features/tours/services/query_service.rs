use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::tours::dtos::TourDetailDto;
use crate::features::tours::models::{PickupTime, Tour, TourDay, TourOption};

/// Read side of the tours feature: rehydrates full tour objects (main
/// record plus children) for a company. No pagination; the UI always
/// loads the whole set.
pub struct TourQueryService {
    pool: PgPool,
}

impl TourQueryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_company(&self, company_ref: &str) -> Result<Vec<TourDetailDto>> {
        let tours: Vec<Tour> = sqlx::query_as(
            r#"
            SELECT id, company_ref, tour_name, operator, operator_id,
                   adult_price, child_price, is_active, created_at
            FROM tours
            WHERE company_ref = $1
            ORDER BY id
            "#,
        )
        .bind(company_ref)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(tours.len());
        for tour in tours {
            let days: Vec<TourDay> = sqlx::query_as(
                "SELECT id, tour_id, slot, day_value FROM tour_days WHERE tour_id = $1 ORDER BY slot",
            )
            .bind(tour.id)
            .fetch_all(&self.pool)
            .await?;

            let pickup_times: Vec<PickupTime> = sqlx::query_as(
                r#"
                SELECT id, tour_id, hour, minute, region, area, period, is_active
                FROM tour_pickup_times
                WHERE tour_id = $1
                ORDER BY id
                "#,
            )
            .bind(tour.id)
            .fetch_all(&self.pool)
            .await?;

            let options: Vec<TourOption> = sqlx::query_as(
                "SELECT id, tour_id, name, price FROM tour_options WHERE tour_id = $1 ORDER BY id",
            )
            .bind(tour.id)
            .fetch_all(&self.pool)
            .await?;

            result.push(TourDetailDto::assemble(tour, days, pickup_times, options));
        }

        Ok(result)
    }
}
