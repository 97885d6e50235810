use chrono::Utc;
use sqlx::PgPool;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::VehicleDetailResponse;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing_service::PricingService;
use crate::utils::errors::AppResult;

/// Escaparate público: vehículos disponibles y todavía no vendidos
pub struct AdvertController {
    vehicles: VehicleRepository,
    details: VehicleController,
}

impl AdvertController {
    pub fn new(pool: PgPool, pricing: PricingService) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            details: VehicleController::new(pool, pricing),
        }
    }

    pub async fn list(&self) -> AppResult<ApiResponse<Vec<VehicleDetailResponse>>> {
        let today = Utc::now().date_naive();
        let rows = self.vehicles.find_advertised(today).await?;
        let adverts = self.details.details(rows).await?;

        Ok(ApiResponse::success(adverts))
    }
}
