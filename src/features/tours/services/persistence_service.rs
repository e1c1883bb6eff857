use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::tours::dtos::{encode_week, TourEntryDto};

/// Write side of the tours feature: replaces a company's entire tour set
/// (main rows plus day/pickup/option children) inside one transaction.
pub struct TourPersistenceService {
    pool: PgPool,
}

impl TourPersistenceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete every tour owned by `company_ref` and insert the submitted
    /// set in its place. All-or-nothing: any failure rolls the whole call
    /// back, leaving the previous rows untouched. Re-running with the same
    /// input yields the same rows modulo regenerated ids.
    pub async fn replace_all_tours(
        &self,
        company_ref: &str,
        tours: &[TourEntryDto],
    ) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        // Children go with their tours via ON DELETE CASCADE
        sqlx::query("DELETE FROM tours WHERE company_ref = $1")
            .bind(company_ref)
            .execute(&mut *tx)
            .await?;

        for entry in tours {
            let main = &entry.main_tour;
            let tour_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO tours
                    (company_ref, tour_name, operator, operator_id, adult_price, child_price, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
                "#,
            )
            .bind(company_ref)
            .bind(&main.tour_name)
            .bind(&main.operator)
            .bind(&main.operator_id)
            .bind(main.adult_price)
            .bind(main.child_price)
            .bind(main.is_active.unwrap_or(true))
            .fetch_one(&mut *tx)
            .await?;

            // Always 7 rows, slot 1..7, unselected slots hold 0
            for (index, day_value) in encode_week(&entry.days).into_iter().enumerate() {
                sqlx::query(
                    "INSERT INTO tour_days (tour_id, slot, day_value) VALUES ($1, $2, $3)",
                )
                .bind(tour_id)
                .bind((index + 1) as i16)
                .bind(day_value)
                .execute(&mut *tx)
                .await?;
            }

            for pickup in &entry.pickup_times {
                let spec = pickup.normalized();
                sqlx::query(
                    r#"
                    INSERT INTO tour_pickup_times
                        (tour_id, hour, minute, region, area, period, is_active)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(tour_id)
                .bind(&spec.hour)
                .bind(&spec.minute)
                .bind(&spec.region)
                .bind(&spec.area)
                .bind(&spec.period)
                .bind(spec.is_active)
                .execute(&mut *tx)
                .await?;
            }

            // Blank option rows are dropped at normalization
            for spec in entry.options.iter().filter_map(|o| o.normalized()) {
                sqlx::query("INSERT INTO tour_options (tour_id, name, price) VALUES ($1, $2, $3)")
                    .bind(tour_id)
                    .bind(&spec.name)
                    .bind(spec.price)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        tracing::info!(
            "Replaced tour set: company_ref={}, saved_count={}",
            company_ref,
            tours.len()
        );

        Ok(tours.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tours::dtos::{PickupTimeDto, TourMainDto, TourOptionDto};
    use crate::features::tours::services::TourQueryService;
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    fn entry(name: &str, days: &[i16]) -> TourEntryDto {
        TourEntryDto {
            main_tour: TourMainDto {
                tour_name: name.to_string(),
                operator: "Akdeniz Turizm".to_string(),
                operator_id: "AKD-17".to_string(),
                adult_price: Decimal::from(45),
                child_price: Decimal::from(20),
                is_active: Some(true),
            },
            days: days.to_vec(),
            pickup_times: vec![PickupTimeDto::default()],
            options: vec![
                TourOptionDto {
                    name: "".to_string(),
                    price: Decimal::ZERO,
                },
                TourOptionDto {
                    name: "Lunch".to_string(),
                    price: Decimal::from(10),
                },
            ],
        }
    }

    async fn day_row_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM tour_days")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn test_save_then_query_round_trips(pool: PgPool) {
        let persistence = TourPersistenceService::new(pool.clone());
        let query = TourQueryService::new(pool.clone());

        let saved = persistence
            .replace_all_tours("ACME-1", &[entry("Pamukkale", &[2, 5])])
            .await
            .unwrap();
        assert_eq!(saved, 1);

        let loaded = query.list_for_company("ACME-1").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].main_tour.tour_name, "Pamukkale");
        assert_eq!(loaded[0].days, vec![2, 5]);

        // Blank option dropped, named one kept
        assert_eq!(loaded[0].options.len(), 1);
        assert_eq!(loaded[0].options[0].name, "Lunch");

        // Empty pickup entry stored with its defaults
        assert_eq!(loaded[0].pickup_times.len(), 1);
        let pickup = &loaded[0].pickup_times[0];
        assert_eq!(pickup.hour, "00");
        assert_eq!(pickup.minute, "00");
        assert_eq!(pickup.region, "");
        assert_eq!(pickup.area, "");
        assert_eq!(pickup.period, "1");
        assert!(pickup.is_active);

        // Storage always holds the full fixed-width week
        assert_eq!(day_row_count(&pool).await, 7);
    }

    #[sqlx::test]
    async fn test_empty_list_wipes_company(pool: PgPool) {
        let persistence = TourPersistenceService::new(pool.clone());
        let query = TourQueryService::new(pool.clone());

        persistence
            .replace_all_tours("ACME-1", &[entry("Efes", &[1]), entry("Kapadokya", &[3])])
            .await
            .unwrap();

        let saved = persistence.replace_all_tours("ACME-1", &[]).await.unwrap();
        assert_eq!(saved, 0);

        assert!(query.list_for_company("ACME-1").await.unwrap().is_empty());
        // Children went with their tours
        assert_eq!(day_row_count(&pool).await, 0);
    }

    #[sqlx::test]
    async fn test_repeated_save_is_idempotent(pool: PgPool) {
        let persistence = TourPersistenceService::new(pool.clone());
        let query = TourQueryService::new(pool.clone());
        let tours = [entry("Efes", &[2, 5]), entry("Pamukkale", &[7])];

        persistence.replace_all_tours("ACME-1", &tours).await.unwrap();
        let first = query.list_for_company("ACME-1").await.unwrap();

        persistence.replace_all_tours("ACME-1", &tours).await.unwrap();
        let second = query.list_for_company("ACME-1").await.unwrap();

        // Same observable set both times, ids aside
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.main_tour.tour_name, b.main_tour.tour_name);
            assert_eq!(a.days, b.days);
            assert_eq!(a.pickup_times.len(), b.pickup_times.len());
            assert_eq!(a.options.len(), b.options.len());
        }
        assert_eq!(day_row_count(&pool).await, 14);
    }

    #[sqlx::test]
    async fn test_failed_child_insert_rolls_back_whole_call(pool: PgPool) {
        let persistence = TourPersistenceService::new(pool.clone());
        let query = TourQueryService::new(pool.clone());

        persistence
            .replace_all_tours("ACME-1", &[entry("Efes", &[1])])
            .await
            .unwrap();

        // Third tour carries an option price that overflows NUMERIC(10,2),
        // so its child insert fails after the first two tours went in.
        let mut bad = entry("Kaçak", &[4]);
        bad.options.push(TourOptionDto {
            name: "Overflow".to_string(),
            price: "99999999999".parse().unwrap(),
        });
        let result = persistence
            .replace_all_tours(
                "ACME-1",
                &[entry("Pamukkale", &[2]), entry("Kapadokya", &[3]), bad],
            )
            .await;
        assert!(result.is_err());

        // The whole call rolled back: nothing from it was written and the
        // in-call delete of the previous set was undone with it.
        let loaded = query.list_for_company("ACME-1").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].main_tour.tour_name, "Efes");
        assert_eq!(day_row_count(&pool).await, 7);
    }
}
