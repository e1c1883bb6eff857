use sqlx::{PgPool, Postgres, Transaction};

use crate::core::error::Result;
use crate::features::catalog::dtos::{
    group_region_rows, CatalogResponseDto, IdNameDto, SaveCatalogDto,
};
use crate::features::catalog::models::{Area, RegionAreaRow, TourListEntry};
use crate::shared::constants::ZONING_REGION_NAME;

/// Replace-all sync of a company's reference catalog: tour-name rows, the
/// flat zoning list, and the general region/area hierarchy. Same
/// transactional discipline as the tour set itself.
pub struct CatalogService {
    pool: PgPool,
}

impl CatalogService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete the company's whole catalog and reinsert the submitted one,
    /// all inside a single transaction.
    pub async fn replace_for_company(&self, company_id: &str, dto: &SaveCatalogDto) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM tourlist WHERE company_id = $1")
            .bind(company_id)
            .execute(&mut *tx)
            .await?;

        // Zoning region first, then the general hierarchy; areas cascade
        // with their region rows.
        sqlx::query("DELETE FROM regionslist WHERE company_id = $1 AND name = $2")
            .bind(company_id)
            .bind(ZONING_REGION_NAME)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM regionslist WHERE company_id = $1 AND name <> $2")
            .bind(company_id)
            .bind(ZONING_REGION_NAME)
            .execute(&mut *tx)
            .await?;

        for tour in &dto.tours {
            sqlx::query("INSERT INTO tourlist (company_id, name) VALUES ($1, $2)")
                .bind(company_id)
                .bind(&tour.name)
                .execute(&mut *tx)
                .await?;
        }

        if !dto.bolgeler.is_empty() {
            let region_id =
                Self::insert_region(&mut tx, company_id, ZONING_REGION_NAME).await?;
            for bolge in &dto.bolgeler {
                Self::insert_area(&mut tx, company_id, region_id, &bolge.name).await?;
            }
        }

        for region in &dto.regions {
            // The zoning list is fed exclusively through `bolgeler`
            if region.name == ZONING_REGION_NAME {
                continue;
            }
            let region_id = Self::insert_region(&mut tx, company_id, &region.name).await?;
            for area in &region.areas {
                Self::insert_area(&mut tx, company_id, region_id, &area.name).await?;
            }
        }

        tx.commit().await?;

        tracing::info!(
            "Replaced catalog: company_id={}, tours={}, bolgeler={}, regions={}",
            company_id,
            dto.tours.len(),
            dto.bolgeler.len(),
            dto.regions.len()
        );

        Ok(())
    }

    pub async fn get_for_company(&self, company_id: &str) -> Result<CatalogResponseDto> {
        let tours: Vec<TourListEntry> = sqlx::query_as(
            "SELECT id, company_id, name FROM tourlist WHERE company_id = $1 ORDER BY id",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        let bolgeler: Vec<Area> = sqlx::query_as(
            r#"
            SELECT a.id, a.company_id, a.region_id, a.name
            FROM areaslist a
            INNER JOIN regionslist r ON a.region_id = r.id
            WHERE a.company_id = $1 AND r.name = $2
            ORDER BY a.id
            "#,
        )
        .bind(company_id)
        .bind(ZONING_REGION_NAME)
        .fetch_all(&self.pool)
        .await?;

        let region_rows: Vec<RegionAreaRow> = sqlx::query_as(
            r#"
            SELECT r.id, r.name, a.id AS area_id, a.name AS area_name
            FROM regionslist r
            LEFT JOIN areaslist a ON r.id = a.region_id
            WHERE r.company_id = $1 AND r.name <> $2
            ORDER BY r.id, a.id
            "#,
        )
        .bind(company_id)
        .bind(ZONING_REGION_NAME)
        .fetch_all(&self.pool)
        .await?;

        Ok(CatalogResponseDto {
            tours: tours.into_iter().map(Into::into).collect(),
            bolgeler: bolgeler
                .into_iter()
                .map(|row| IdNameDto {
                    id: row.id,
                    name: row.name,
                })
                .collect(),
            regions: group_region_rows(region_rows),
        })
    }

    async fn insert_region(
        tx: &mut Transaction<'_, Postgres>,
        company_id: &str,
        name: &str,
    ) -> Result<i64> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO regionslist (company_id, name) VALUES ($1, $2) RETURNING id")
                .bind(company_id)
                .bind(name)
                .fetch_one(&mut **tx)
                .await?;
        Ok(id)
    }

    async fn insert_area(
        tx: &mut Transaction<'_, Postgres>,
        company_id: &str,
        region_id: i64,
        name: &str,
    ) -> Result<()> {
        sqlx::query("INSERT INTO areaslist (company_id, region_id, name) VALUES ($1, $2, $3)")
            .bind(company_id)
            .bind(region_id)
            .bind(name)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
