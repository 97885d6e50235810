use sqlx::PgPool;
use tracing::{info, warn};

use crate::dto::api_response::ApiResponse;
use crate::models::sale::{Sale, SaleRequest};
use crate::repositories::purchase_repository::PurchaseRepository;
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::sale_repository::SaleRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing_service::PricingService;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct SaleController {
    repository: SaleRepository,
    vehicles: VehicleRepository,
    purchases: PurchaseRepository,
    repairs: RepairRepository,
    pricing: PricingService,
}

impl SaleController {
    pub fn new(pool: PgPool, pricing: PricingService) -> Self {
        Self {
            repository: SaleRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            purchases: PurchaseRepository::new(pool.clone()),
            repairs: RepairRepository::new(pool),
            pricing,
        }
    }

    pub async fn create(&self, vehicle_id: i32, request: SaleRequest) -> AppResult<ApiResponse<Sale>> {
        ensure_valid_id(vehicle_id)?;

        if !self.vehicles.exists(vehicle_id).await? {
            return Err(not_found_error("Vehicle", vehicle_id));
        }
        if self.repository.find_by_vehicle(vehicle_id).await?.is_some() {
            return Err(already_on_sale(vehicle_id));
        }
        self.ensure_price_floor(vehicle_id, &request).await?;

        let sale = self
            .repository
            .create(vehicle_id, &request)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => already_on_sale(vehicle_id),
                other => other,
            })?;

        info!("🏷️ Vehículo {} puesto en venta a {}", vehicle_id, sale.price);
        Ok(ApiResponse::success_with_message(
            sale,
            "Sale created successfully".to_string(),
        ))
    }

    pub async fn update(&self, vehicle_id: i32, request: SaleRequest) -> AppResult<ApiResponse<Sale>> {
        ensure_valid_id(vehicle_id)?;

        if self.repository.find_by_vehicle(vehicle_id).await?.is_none() {
            return Err(sale_not_found(vehicle_id));
        }
        self.ensure_price_floor(vehicle_id, &request).await?;

        let sale = self
            .repository
            .update(vehicle_id, &request)
            .await?
            .ok_or_else(|| sale_not_found(vehicle_id))?;

        info!("🏷️ Venta actualizada para el vehículo {}", vehicle_id);
        Ok(ApiResponse::success_with_message(
            sale,
            "Sale updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, vehicle_id: i32) -> AppResult<()> {
        ensure_valid_id(vehicle_id)?;

        if !self.repository.delete(vehicle_id).await? {
            return Err(sale_not_found(vehicle_id));
        }

        info!("🗑️ Venta eliminada del vehículo {}", vehicle_id);
        Ok(())
    }

    /// Aviso cuando una venta ya registrada queda por debajo del precio mínimo
    ///
    /// Se llama tras modificar la compra o las reparaciones del vehículo.
    pub async fn price_floor_warning(&self, vehicle_id: i32) -> AppResult<Option<String>> {
        let (sale, purchase, repairs) = futures::try_join!(
            self.repository.find_by_vehicle(vehicle_id),
            self.purchases.find_by_vehicle(vehicle_id),
            self.repairs.find_by_vehicle(vehicle_id),
        )?;

        let Some(sale) = sale else {
            return Ok(None);
        };

        Ok(self
            .pricing
            .floor_shortfall(sale.price, purchase.as_ref(), &repairs)
            .map(|minimum| {
                warn!(
                    "⚠️ La venta del vehículo {} ({}) queda por debajo del mínimo {}",
                    vehicle_id, sale.price, minimum
                );
                format!(
                    "Sale price {} is now below the minimum sale price {}",
                    sale.price, minimum
                )
            }))
    }

    /// El precio debe cubrir compra + reparaciones + margen
    async fn ensure_price_floor(&self, vehicle_id: i32, request: &SaleRequest) -> AppResult<()> {
        let (purchase, repairs) = futures::try_join!(
            self.purchases.find_by_vehicle(vehicle_id),
            self.repairs.find_by_vehicle(vehicle_id),
        )?;

        self.pricing
            .ensure_sale_price(request.price, purchase.as_ref(), &repairs)
    }
}

/// Añade el aviso de precio mínimo al mensaje de la respuesta
pub(crate) fn with_floor_warning(message: &str, warning: Option<String>) -> String {
    match warning {
        Some(warning) => format!("{}. {}", message, warning),
        None => message.to_string(),
    }
}

fn already_on_sale(vehicle_id: i32) -> AppError {
    AppError::Conflict(format!("Vehicle with ID {} already has a sale", vehicle_id))
}

fn sale_not_found(vehicle_id: i32) -> AppError {
    AppError::NotFound(format!("Sale for vehicle with ID {} not found", vehicle_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_floor_warning() {
        assert_eq!(
            with_floor_warning("Repair created successfully", None),
            "Repair created successfully"
        );
        assert_eq!(
            with_floor_warning(
                "Repair created successfully",
                Some("Sale price 5000 is now below the minimum sale price 5600".to_string())
            ),
            "Repair created successfully. Sale price 5000 is now below the minimum sale price 5600"
        );
    }
}
