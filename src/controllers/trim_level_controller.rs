use sqlx::PgPool;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::models::trim_level::{TrimLevel, TrimLevelRequest, TrimLevelWithModel};
use crate::repositories::trim_level_repository::TrimLevelRepository;
use crate::repositories::vehicle_model_repository::VehicleModelRepository;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct TrimLevelController {
    repository: TrimLevelRepository,
    models: VehicleModelRepository,
}

impl TrimLevelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TrimLevelRepository::new(pool.clone()),
            models: VehicleModelRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<ApiResponse<Vec<TrimLevelWithModel>>> {
        let trim_levels = self.repository.list().await?;
        Ok(ApiResponse::success(trim_levels))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ApiResponse<TrimLevelWithModel>> {
        ensure_valid_id(id)?;

        let trim_level = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Trim level", id))?;

        Ok(ApiResponse::success(trim_level))
    }

    pub async fn create(&self, request: TrimLevelRequest) -> AppResult<ApiResponse<TrimLevel>> {
        if !self.models.exists(request.model_id).await? {
            return Err(not_found_error("Model", request.model_id));
        }

        let name = request.name.trim();
        let trim_level = self
            .repository
            .create(request.model_id, name)
            .await
            .map_err(|e| duplicate_name(e, name))?;

        info!("✨ Finition {} creada ({})", trim_level.id, trim_level.name);
        Ok(ApiResponse::success_with_message(
            trim_level,
            "Trim level created successfully".to_string(),
        ))
    }

    pub async fn update(&self, id: i32, request: TrimLevelRequest) -> AppResult<ApiResponse<TrimLevel>> {
        ensure_valid_id(id)?;

        if !self.models.exists(request.model_id).await? {
            return Err(not_found_error("Model", request.model_id));
        }

        let name = request.name.trim();
        let trim_level = self
            .repository
            .update(id, request.model_id, name)
            .await
            .map_err(|e| duplicate_name(e, name))?
            .ok_or_else(|| not_found_error("Trim level", id))?;

        info!("✨ Finition {} actualizada", trim_level.id);
        Ok(ApiResponse::success_with_message(
            trim_level,
            "Trim level updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        ensure_valid_id(id)?;

        let deleted = self.repository.delete(id).await.map_err(|e| match e {
            AppError::Conflict(_) => AppError::Conflict(
                "Trim level is used by at least one vehicle and cannot be deleted".to_string(),
            ),
            other => other,
        })?;

        if !deleted {
            return Err(not_found_error("Trim level", id));
        }

        info!("🗑️ Finition {} eliminada", id);
        Ok(())
    }
}

fn duplicate_name(error: AppError, name: &str) -> AppError {
    match error {
        AppError::Conflict(_) => {
            AppError::Conflict(format!("Trim level '{}' already exists for this model", name))
        }
        other => other,
    }
}
