use std::collections::HashMap;

use sqlx::PgPool;
use tracing::info;

use crate::dto::api_response::{ApiResponse, PagedResponse};
use crate::dto::vehicle_dto::{VehicleDetailResponse, VehicleListParams, VehicleListQuery};
use crate::models::repair::Repair;
use crate::models::vehicle::{VehicleBatch, VehicleRequest, VehicleRow};
use crate::repositories::purchase_repository::PurchaseRepository;
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::sale_repository::SaleRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing_service::PricingService;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct VehicleController {
    repository: VehicleRepository,
    purchases: PurchaseRepository,
    sales: SaleRepository,
    repairs: RepairRepository,
    pricing: PricingService,
}

impl VehicleController {
    pub fn new(pool: PgPool, pricing: PricingService) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            purchases: PurchaseRepository::new(pool.clone()),
            sales: SaleRepository::new(pool.clone()),
            repairs: RepairRepository::new(pool),
            pricing,
        }
    }

    pub async fn list(
        &self,
        query: VehicleListQuery,
    ) -> AppResult<ApiResponse<PagedResponse<VehicleDetailResponse>>> {
        let params = VehicleListParams::try_from(query)?;

        let (rows, total_items) = self.repository.list(&params).await?;
        let items = self.details(rows).await?;

        Ok(ApiResponse::success(PagedResponse::new(
            items,
            params.page_number,
            params.page_size,
            total_items,
        )))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ApiResponse<VehicleDetailResponse>> {
        ensure_valid_id(id)?;
        Ok(ApiResponse::success(self.detail(id).await?))
    }

    pub async fn create(&self, request: VehicleRequest) -> AppResult<ApiResponse<VehicleDetailResponse>> {
        let id = self
            .repository
            .create(&request)
            .await
            .map_err(duplicate_vin)?;

        info!("🚗 Vehículo {} creado ({} {} {})", id, request.year, request.brand_name(), request.model_name());
        Ok(ApiResponse::success_with_message(
            self.detail(id).await?,
            "Vehicle created successfully".to_string(),
        ))
    }

    /// Creación masiva en una sola transacción
    pub async fn create_bulk(
        &self,
        batch: VehicleBatch,
    ) -> AppResult<ApiResponse<Vec<VehicleDetailResponse>>> {
        let ids = self
            .repository
            .create_many(&batch.0)
            .await
            .map_err(duplicate_vin)?;

        let rows = self.repository.find_by_ids(&ids).await?;
        let vehicles = self.details(rows).await?;

        info!("🚗 {} vehículos creados en lote", vehicles.len());
        Ok(ApiResponse::success_with_message(
            vehicles,
            format!("{} vehicles created successfully", ids.len()),
        ))
    }

    pub async fn update(
        &self,
        id: i32,
        request: VehicleRequest,
    ) -> AppResult<ApiResponse<VehicleDetailResponse>> {
        ensure_valid_id(id)?;

        let updated = self
            .repository
            .update(id, &request)
            .await
            .map_err(duplicate_vin)?;
        if !updated {
            return Err(not_found_error("Vehicle", id));
        }

        info!("🚗 Vehículo {} actualizado", id);
        Ok(ApiResponse::success_with_message(
            self.detail(id).await?,
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        ensure_valid_id(id)?;

        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehicle", id));
        }

        info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }

    async fn detail(&self, id: i32) -> AppResult<VehicleDetailResponse> {
        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        let (purchase, sale, repairs) = futures::try_join!(
            self.purchases.find_by_vehicle(id),
            self.sales.find_by_vehicle(id),
            self.repairs.find_by_vehicle(id),
        )?;

        Ok(VehicleDetailResponse::new(row, purchase, sale, repairs, &self.pricing))
    }

    /// Completa varias filas con compra, venta y reparaciones (3 consultas)
    pub async fn details(&self, rows: Vec<VehicleRow>) -> AppResult<Vec<VehicleDetailResponse>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let (purchases, sales, repairs) = futures::try_join!(
            self.purchases.find_by_vehicles(&ids),
            self.sales.find_by_vehicles(&ids),
            self.repairs.find_by_vehicles(&ids),
        )?;

        let mut purchases: HashMap<i32, _> = purchases
            .into_iter()
            .map(|purchase| (purchase.vehicle_id, purchase))
            .collect();
        let mut sales: HashMap<i32, _> = sales.into_iter().map(|sale| (sale.vehicle_id, sale)).collect();
        let mut repairs_by_vehicle: HashMap<i32, Vec<Repair>> = HashMap::new();
        for repair in repairs {
            repairs_by_vehicle.entry(repair.vehicle_id).or_default().push(repair);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let id = row.id;
                VehicleDetailResponse::new(
                    row,
                    purchases.remove(&id),
                    sales.remove(&id),
                    repairs_by_vehicle.remove(&id).unwrap_or_default(),
                    &self.pricing,
                )
            })
            .collect())
    }
}

fn duplicate_vin(error: AppError) -> AppError {
    match error {
        AppError::Conflict(message) if message.contains("vin") => {
            AppError::Conflict("A vehicle with this VIN already exists".to_string())
        }
        other => other,
    }
}
