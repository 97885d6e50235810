use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::controllers::purchase_controller::PurchaseController;
use crate::dto::api_response::ApiResponse;
use crate::models::purchase::{Purchase, PurchaseRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

/// Rutas de compra, anidadas bajo /api/vehicle
pub fn create_purchase_router() -> Router<AppState> {
    Router::new().route(
        "/:id/purchase",
        post(create_purchase).put(update_purchase).delete(delete_purchase),
    )
}

async fn create_purchase(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PurchaseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Purchase>>), AppError> {
    let controller = PurchaseController::new(state.pool.clone(), state.pricing);
    let response = controller.create(vehicle_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_purchase(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PurchaseRequest>,
) -> Result<Json<ApiResponse<Purchase>>, AppError> {
    let controller = PurchaseController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.update(vehicle_id, request).await?))
}

async fn delete_purchase(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = PurchaseController::new(state.pool.clone(), state.pricing);
    controller.delete(vehicle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
