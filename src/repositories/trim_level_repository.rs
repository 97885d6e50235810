use sqlx::PgPool;

use crate::models::trim_level::{TrimLevel, TrimLevelWithModel};
use crate::utils::errors::AppError;

const SELECT_WITH_MODEL: &str = r#"
    SELECT t.id, t.model_id, m.name AS model_name, m.brand_id, b.name AS brand_name,
           t.name, t.created_at
    FROM trim_levels t
    JOIN models m ON m.id = t.model_id
    JOIN brands b ON b.id = m.brand_id
"#;

pub struct TrimLevelRepository {
    pool: PgPool,
}

impl TrimLevelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TrimLevelWithModel>, AppError> {
        let trim_levels = sqlx::query_as::<_, TrimLevelWithModel>(&format!(
            "{} ORDER BY b.name, m.name, t.name, t.id",
            SELECT_WITH_MODEL
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(trim_levels)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrimLevelWithModel>, AppError> {
        let trim_level = sqlx::query_as::<_, TrimLevelWithModel>(&format!(
            "{} WHERE t.id = $1",
            SELECT_WITH_MODEL
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trim_level)
    }

    pub async fn find_by_model(&self, model_id: i32) -> Result<Vec<TrimLevel>, AppError> {
        let trim_levels = sqlx::query_as::<_, TrimLevel>(
            "SELECT * FROM trim_levels WHERE model_id = $1 ORDER BY name, id",
        )
        .bind(model_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trim_levels)
    }

    pub async fn create(&self, model_id: i32, name: &str) -> Result<TrimLevel, AppError> {
        let trim_level = sqlx::query_as::<_, TrimLevel>(
            "INSERT INTO trim_levels (model_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(model_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(trim_level)
    }

    pub async fn update(
        &self,
        id: i32,
        model_id: i32,
        name: &str,
    ) -> Result<Option<TrimLevel>, AppError> {
        let trim_level = sqlx::query_as::<_, TrimLevel>(
            "UPDATE trim_levels SET model_id = $2, name = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(model_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trim_level)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trim_levels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
