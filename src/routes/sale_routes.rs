use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::controllers::sale_controller::SaleController;
use crate::dto::api_response::ApiResponse;
use crate::models::sale::{Sale, SaleRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

/// Rutas de venta, anidadas bajo /api/vehicle
pub fn create_sale_router() -> Router<AppState> {
    Router::new().route(
        "/:id/sale",
        post(create_sale).put(update_sale).delete(delete_sale),
    )
}

async fn create_sale(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<SaleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Sale>>), AppError> {
    let controller = SaleController::new(state.pool.clone(), state.pricing);
    let response = controller.create(vehicle_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_sale(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<SaleRequest>,
) -> Result<Json<ApiResponse<Sale>>, AppError> {
    let controller = SaleController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.update(vehicle_id, request).await?))
}

async fn delete_sale(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = SaleController::new(state.pool.clone(), state.pricing);
    controller.delete(vehicle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
