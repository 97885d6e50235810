use sqlx::PgPool;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::catalog_dto::BrandDetailResponse;
use crate::models::brand::{Brand, BrandRequest, BrandSummary};
use crate::models::vehicle_model::VehicleModel;
use crate::repositories::brand_repository::BrandRepository;
use crate::repositories::vehicle_model_repository::VehicleModelRepository;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct BrandController {
    repository: BrandRepository,
    models: VehicleModelRepository,
}

impl BrandController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BrandRepository::new(pool.clone()),
            models: VehicleModelRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<ApiResponse<Vec<BrandSummary>>> {
        let brands = self.repository.list().await?;
        Ok(ApiResponse::success(brands))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ApiResponse<BrandDetailResponse>> {
        ensure_valid_id(id)?;

        let brand = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Brand", id))?;
        let models = self.models.find_by_brand(id).await?;

        Ok(ApiResponse::success(BrandDetailResponse::new(brand, models)))
    }

    /// Modelos de una marca (lista desplegable del formulario de vehículo)
    pub async fn list_models(&self, id: i32) -> AppResult<ApiResponse<Vec<VehicleModel>>> {
        ensure_valid_id(id)?;

        if !self.repository.exists(id).await? {
            return Err(not_found_error("Brand", id));
        }
        let models = self.models.find_by_brand(id).await?;

        Ok(ApiResponse::success(models))
    }

    pub async fn create(&self, request: BrandRequest) -> AppResult<ApiResponse<Brand>> {
        let name = request.name.trim();
        let brand = self
            .repository
            .create(name)
            .await
            .map_err(|e| duplicate_name(e, name))?;

        info!("🏷️ Marca {} creada ({})", brand.id, brand.name);
        Ok(ApiResponse::success_with_message(
            brand,
            "Brand created successfully".to_string(),
        ))
    }

    pub async fn update(&self, id: i32, request: BrandRequest) -> AppResult<ApiResponse<Brand>> {
        ensure_valid_id(id)?;

        let name = request.name.trim();
        let brand = self
            .repository
            .update(id, name)
            .await
            .map_err(|e| duplicate_name(e, name))?
            .ok_or_else(|| not_found_error("Brand", id))?;

        info!("🏷️ Marca {} actualizada", brand.id);
        Ok(ApiResponse::success_with_message(
            brand,
            "Brand updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        ensure_valid_id(id)?;

        let deleted = self.repository.delete(id).await.map_err(|e| match e {
            AppError::Conflict(_) => AppError::Conflict(
                "Brand is used by at least one vehicle and cannot be deleted".to_string(),
            ),
            other => other,
        })?;

        if !deleted {
            return Err(not_found_error("Brand", id));
        }

        info!("🗑️ Marca {} eliminada", id);
        Ok(())
    }
}

fn duplicate_name(error: AppError, name: &str) -> AppError {
    match error {
        AppError::Conflict(_) => AppError::Conflict(format!("Brand '{}' already exists", name)),
        other => other,
    }
}
