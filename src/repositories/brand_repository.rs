use sqlx::PgPool;

use crate::models::brand::{Brand, BrandSummary};
use crate::utils::errors::AppError;

pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<BrandSummary>, AppError> {
        let brands = sqlx::query_as::<_, BrandSummary>(
            r#"
            SELECT b.id, b.name, b.created_at, COUNT(m.id) AS model_count
            FROM brands b
            LEFT JOIN models m ON m.brand_id = b.id
            GROUP BY b.id, b.name, b.created_at
            ORDER BY b.name, b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(brands)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM brands WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn create(&self, name: &str) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>("INSERT INTO brands (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(brand)
    }

    pub async fn update(&self, id: i32, name: &str) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>("UPDATE brands SET name = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    /// Borra la marca y, en cascada, sus modelos y finitions
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
