use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::purchase::Purchase;
use crate::utils::errors::AppError;

pub struct PurchaseRepository {
    pool: PgPool,
}

impl PurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i32) -> Result<Option<Purchase>, AppError> {
        let purchase = sqlx::query_as::<_, Purchase>("SELECT * FROM purchases WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(purchase)
    }

    /// Compras de varios vehículos en una sola consulta
    pub async fn find_by_vehicles(&self, vehicle_ids: &[i32]) -> Result<Vec<Purchase>, AppError> {
        let purchases = sqlx::query_as::<_, Purchase>(
            "SELECT * FROM purchases WHERE vehicle_id = ANY($1)",
        )
        .bind(vehicle_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(purchases)
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        date: NaiveDate,
        price: Decimal,
    ) -> Result<Purchase, AppError> {
        let purchase = sqlx::query_as::<_, Purchase>(
            "INSERT INTO purchases (vehicle_id, date, price) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(vehicle_id)
        .bind(date)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        Ok(purchase)
    }

    pub async fn update(
        &self,
        vehicle_id: i32,
        date: NaiveDate,
        price: Decimal,
    ) -> Result<Option<Purchase>, AppError> {
        let purchase = sqlx::query_as::<_, Purchase>(
            "UPDATE purchases SET date = $2, price = $3 WHERE vehicle_id = $1 RETURNING *",
        )
        .bind(vehicle_id)
        .bind(date)
        .bind(price)
        .fetch_optional(&self.pool)
        .await?;

        Ok(purchase)
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM purchases WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
