use sqlx::PgPool;

use crate::models::vehicle_model::{VehicleModel, VehicleModelWithBrand};
use crate::utils::errors::AppError;

const SELECT_WITH_BRAND: &str = r#"
    SELECT m.id, m.brand_id, b.name AS brand_name, m.name, m.created_at
    FROM models m
    JOIN brands b ON b.id = m.brand_id
"#;

pub struct VehicleModelRepository {
    pool: PgPool,
}

impl VehicleModelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<VehicleModelWithBrand>, AppError> {
        let models = sqlx::query_as::<_, VehicleModelWithBrand>(&format!(
            "{} ORDER BY b.name, m.name, m.id",
            SELECT_WITH_BRAND
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(models)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleModelWithBrand>, AppError> {
        let model = sqlx::query_as::<_, VehicleModelWithBrand>(&format!(
            "{} WHERE m.id = $1",
            SELECT_WITH_BRAND
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM models WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Modelos de una marca, ordenados por nombre
    pub async fn find_by_brand(&self, brand_id: i32) -> Result<Vec<VehicleModel>, AppError> {
        let models = sqlx::query_as::<_, VehicleModel>(
            "SELECT * FROM models WHERE brand_id = $1 ORDER BY name, id",
        )
        .bind(brand_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(models)
    }

    pub async fn create(&self, brand_id: i32, name: &str) -> Result<VehicleModel, AppError> {
        let model = sqlx::query_as::<_, VehicleModel>(
            "INSERT INTO models (brand_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(brand_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn update(
        &self,
        id: i32,
        brand_id: i32,
        name: &str,
    ) -> Result<Option<VehicleModel>, AppError> {
        let model = sqlx::query_as::<_, VehicleModel>(
            "UPDATE models SET brand_id = $2, name = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(brand_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
