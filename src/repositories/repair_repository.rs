use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::repair::Repair;
use crate::utils::errors::AppError;

pub struct RepairRepository {
    pool: PgPool,
}

impl RepairRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<Repair>, AppError> {
        let repairs = sqlx::query_as::<_, Repair>(
            "SELECT * FROM repairs WHERE vehicle_id = $1 ORDER BY created_at, id",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(repairs)
    }

    pub async fn find_by_vehicles(&self, vehicle_ids: &[i32]) -> Result<Vec<Repair>, AppError> {
        let repairs = sqlx::query_as::<_, Repair>(
            "SELECT * FROM repairs WHERE vehicle_id = ANY($1) ORDER BY created_at, id",
        )
        .bind(vehicle_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(repairs)
    }

    /// Reparación `id` siempre que pertenezca al vehículo indicado
    pub async fn find_for_vehicle(&self, vehicle_id: i32, id: i32) -> Result<Option<Repair>, AppError> {
        let repair = sqlx::query_as::<_, Repair>(
            "SELECT * FROM repairs WHERE id = $1 AND vehicle_id = $2",
        )
        .bind(id)
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(repair)
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        description: &str,
        cost: Decimal,
    ) -> Result<Repair, AppError> {
        let repair = sqlx::query_as::<_, Repair>(
            "INSERT INTO repairs (vehicle_id, description, cost) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(vehicle_id)
        .bind(description)
        .bind(cost)
        .fetch_one(&self.pool)
        .await?;

        Ok(repair)
    }

    pub async fn update(
        &self,
        vehicle_id: i32,
        id: i32,
        description: &str,
        cost: Decimal,
    ) -> Result<Option<Repair>, AppError> {
        let repair = sqlx::query_as::<_, Repair>(
            r#"
            UPDATE repairs SET description = $3, cost = $4
            WHERE id = $1 AND vehicle_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(description)
        .bind(cost)
        .fetch_optional(&self.pool)
        .await?;

        Ok(repair)
    }

    pub async fn delete(&self, vehicle_id: i32, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM repairs WHERE id = $1 AND vehicle_id = $2")
            .bind(id)
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
