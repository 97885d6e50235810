use sqlx::PgPool;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::RepairListResponse;
use crate::models::repair::{Repair, RepairRequest};
use crate::controllers::sale_controller::{with_floor_warning, SaleController};
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing_service::PricingService;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct RepairController {
    repository: RepairRepository,
    vehicles: VehicleRepository,
    sales: SaleController,
    pricing: PricingService,
}

impl RepairController {
    pub fn new(pool: PgPool, pricing: PricingService) -> Self {
        Self {
            repository: RepairRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            sales: SaleController::new(pool, pricing),
            pricing,
        }
    }

    pub async fn list(&self, vehicle_id: i32) -> AppResult<ApiResponse<RepairListResponse>> {
        ensure_valid_id(vehicle_id)?;
        self.ensure_vehicle(vehicle_id).await?;

        let repairs = self.repository.find_by_vehicle(vehicle_id).await?;
        let total_repair_cost = self.pricing.total_repair_cost(&repairs);

        Ok(ApiResponse::success(RepairListResponse {
            vehicle_id,
            repairs,
            total_repair_cost,
        }))
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        request: RepairRequest,
    ) -> AppResult<ApiResponse<Repair>> {
        ensure_valid_id(vehicle_id)?;
        self.ensure_vehicle(vehicle_id).await?;

        let repair = self
            .repository
            .create(vehicle_id, request.description.trim(), request.cost)
            .await?;

        info!("🔧 Reparación {} añadida al vehículo {} ({})", repair.id, vehicle_id, repair.cost);
        let warning = self.sales.price_floor_warning(vehicle_id).await?;
        Ok(ApiResponse::success_with_message(
            repair,
            with_floor_warning("Repair created successfully", warning),
        ))
    }

    pub async fn update(
        &self,
        vehicle_id: i32,
        repair_id: i32,
        request: RepairRequest,
    ) -> AppResult<ApiResponse<Repair>> {
        ensure_valid_id(vehicle_id)?;
        ensure_valid_id(repair_id)?;

        let repair = self
            .repository
            .update(vehicle_id, repair_id, request.description.trim(), request.cost)
            .await?
            .ok_or_else(|| repair_not_found(vehicle_id, repair_id))?;

        info!("🔧 Reparación {} actualizada", repair.id);
        let warning = self.sales.price_floor_warning(vehicle_id).await?;
        Ok(ApiResponse::success_with_message(
            repair,
            with_floor_warning("Repair updated successfully", warning),
        ))
    }

    pub async fn delete(&self, vehicle_id: i32, repair_id: i32) -> AppResult<()> {
        ensure_valid_id(vehicle_id)?;
        ensure_valid_id(repair_id)?;

        if !self.repository.delete(vehicle_id, repair_id).await? {
            return Err(repair_not_found(vehicle_id, repair_id));
        }

        info!("🗑️ Reparación {} eliminada del vehículo {}", repair_id, vehicle_id);
        Ok(())
    }

    async fn ensure_vehicle(&self, vehicle_id: i32) -> AppResult<()> {
        if !self.vehicles.exists(vehicle_id).await? {
            return Err(not_found_error("Vehicle", vehicle_id));
        }
        Ok(())
    }
}

fn repair_not_found(vehicle_id: i32, repair_id: i32) -> AppError {
    AppError::NotFound(format!(
        "Repair with ID {} not found for vehicle with ID {}",
        repair_id, vehicle_id
    ))
}
