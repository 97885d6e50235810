use sqlx::PgPool;

use crate::models::sale::{Sale, SaleRequest};
use crate::utils::errors::AppError;

pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i32) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    pub async fn find_by_vehicles(&self, vehicle_ids: &[i32]) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE vehicle_id = ANY($1)")
            .bind(vehicle_ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }

    pub async fn create(&self, vehicle_id: i32, request: &SaleRequest) -> Result<Sale, AppError> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (vehicle_id, availability_date, sale_date, price, title, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(request.availability_date)
        .bind(request.sale_date)
        .bind(request.price)
        .bind(request.title.trim())
        .bind(request.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(sale)
    }

    pub async fn update(&self, vehicle_id: i32, request: &SaleRequest) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            UPDATE sales
            SET availability_date = $2, sale_date = $3, price = $4, title = $5, description = $6
            WHERE vehicle_id = $1
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(request.availability_date)
        .bind(request.sale_date)
        .bind(request.price)
        .bind(request.title.trim())
        .bind(request.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sales WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
