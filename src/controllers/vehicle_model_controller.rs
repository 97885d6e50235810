use sqlx::PgPool;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::catalog_dto::ModelDetailResponse;
use crate::models::trim_level::TrimLevel;
use crate::models::vehicle_model::{VehicleModel, VehicleModelRequest, VehicleModelWithBrand};
use crate::repositories::brand_repository::BrandRepository;
use crate::repositories::trim_level_repository::TrimLevelRepository;
use crate::repositories::vehicle_model_repository::VehicleModelRepository;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct VehicleModelController {
    repository: VehicleModelRepository,
    brands: BrandRepository,
    trim_levels: TrimLevelRepository,
}

impl VehicleModelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleModelRepository::new(pool.clone()),
            brands: BrandRepository::new(pool.clone()),
            trim_levels: TrimLevelRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<ApiResponse<Vec<VehicleModelWithBrand>>> {
        let models = self.repository.list().await?;
        Ok(ApiResponse::success(models))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ApiResponse<ModelDetailResponse>> {
        ensure_valid_id(id)?;

        let model = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Model", id))?;
        let trim_levels = self.trim_levels.find_by_model(id).await?;

        Ok(ApiResponse::success(ModelDetailResponse::new(model, trim_levels)))
    }

    pub async fn list_trim_levels(&self, id: i32) -> AppResult<ApiResponse<Vec<TrimLevel>>> {
        ensure_valid_id(id)?;

        if !self.repository.exists(id).await? {
            return Err(not_found_error("Model", id));
        }
        let trim_levels = self.trim_levels.find_by_model(id).await?;

        Ok(ApiResponse::success(trim_levels))
    }

    pub async fn create(&self, request: VehicleModelRequest) -> AppResult<ApiResponse<VehicleModel>> {
        if !self.brands.exists(request.brand_id).await? {
            return Err(not_found_error("Brand", request.brand_id));
        }

        let name = request.name.trim();
        let model = self
            .repository
            .create(request.brand_id, name)
            .await
            .map_err(|e| duplicate_name(e, name))?;

        info!("🚙 Modelo {} creado ({}) para la marca {}", model.id, model.name, model.brand_id);
        Ok(ApiResponse::success_with_message(
            model,
            "Model created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i32,
        request: VehicleModelRequest,
    ) -> AppResult<ApiResponse<VehicleModel>> {
        ensure_valid_id(id)?;

        if !self.brands.exists(request.brand_id).await? {
            return Err(not_found_error("Brand", request.brand_id));
        }

        let name = request.name.trim();
        let model = self
            .repository
            .update(id, request.brand_id, name)
            .await
            .map_err(|e| duplicate_name(e, name))?
            .ok_or_else(|| not_found_error("Model", id))?;

        info!("🚙 Modelo {} actualizado", model.id);
        Ok(ApiResponse::success_with_message(
            model,
            "Model updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        ensure_valid_id(id)?;

        let deleted = self.repository.delete(id).await.map_err(|e| match e {
            AppError::Conflict(_) => AppError::Conflict(
                "Model is used by at least one vehicle and cannot be deleted".to_string(),
            ),
            other => other,
        })?;

        if !deleted {
            return Err(not_found_error("Model", id));
        }

        info!("🗑️ Modelo {} eliminado", id);
        Ok(())
    }
}

fn duplicate_name(error: AppError, name: &str) -> AppError {
    match error {
        AppError::Conflict(_) => {
            AppError::Conflict(format!("Model '{}' already exists for this brand", name))
        }
        other => other,
    }
}
