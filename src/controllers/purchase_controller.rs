use sqlx::PgPool;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::models::purchase::{Purchase, PurchaseRequest};
use crate::controllers::sale_controller::{with_floor_warning, SaleController};
use crate::repositories::purchase_repository::PurchaseRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing_service::PricingService;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct PurchaseController {
    repository: PurchaseRepository,
    vehicles: VehicleRepository,
    sales: SaleController,
}

impl PurchaseController {
    pub fn new(pool: PgPool, pricing: PricingService) -> Self {
        Self {
            repository: PurchaseRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            sales: SaleController::new(pool, pricing),
        }
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        request: PurchaseRequest,
    ) -> AppResult<ApiResponse<Purchase>> {
        ensure_valid_id(vehicle_id)?;

        if !self.vehicles.exists(vehicle_id).await? {
            return Err(not_found_error("Vehicle", vehicle_id));
        }
        if self.repository.find_by_vehicle(vehicle_id).await?.is_some() {
            return Err(already_purchased(vehicle_id));
        }

        let purchase = self
            .repository
            .create(vehicle_id, request.date, request.price)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => already_purchased(vehicle_id),
                other => other,
            })?;

        info!("💶 Compra registrada para el vehículo {} ({})", vehicle_id, purchase.price);
        let warning = self.sales.price_floor_warning(vehicle_id).await?;
        Ok(ApiResponse::success_with_message(
            purchase,
            with_floor_warning("Purchase created successfully", warning),
        ))
    }

    pub async fn update(
        &self,
        vehicle_id: i32,
        request: PurchaseRequest,
    ) -> AppResult<ApiResponse<Purchase>> {
        ensure_valid_id(vehicle_id)?;

        let purchase = self
            .repository
            .update(vehicle_id, request.date, request.price)
            .await?
            .ok_or_else(|| purchase_not_found(vehicle_id))?;

        info!("💶 Compra actualizada para el vehículo {}", vehicle_id);
        let warning = self.sales.price_floor_warning(vehicle_id).await?;
        Ok(ApiResponse::success_with_message(
            purchase,
            with_floor_warning("Purchase updated successfully", warning),
        ))
    }

    pub async fn delete(&self, vehicle_id: i32) -> AppResult<()> {
        ensure_valid_id(vehicle_id)?;

        if !self.repository.delete(vehicle_id).await? {
            return Err(purchase_not_found(vehicle_id));
        }

        info!("🗑️ Compra eliminada del vehículo {}", vehicle_id);
        Ok(())
    }
}

fn already_purchased(vehicle_id: i32) -> AppError {
    AppError::Conflict(format!("Vehicle with ID {} already has a purchase", vehicle_id))
}

fn purchase_not_found(vehicle_id: i32) -> AppError {
    AppError::NotFound(format!("Purchase for vehicle with ID {} not found", vehicle_id))
}
