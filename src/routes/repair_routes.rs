use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::repair_controller::RepairController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::RepairListResponse;
use crate::models::repair::{Repair, RepairRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

/// Rutas de reparaciones, anidadas bajo /api/vehicle
pub fn create_repair_router() -> Router<AppState> {
    Router::new()
        .route("/:id/repair", get(list_repairs).post(create_repair))
        .route("/:id/repair/:repair_id", put(update_repair).delete(delete_repair))
}

async fn list_repairs(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<Json<ApiResponse<RepairListResponse>>, AppError> {
    let controller = RepairController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.list(vehicle_id).await?))
}

async fn create_repair(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<RepairRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Repair>>), AppError> {
    let controller = RepairController::new(state.pool.clone(), state.pricing);
    let response = controller.create(vehicle_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_repair(
    State(state): State<AppState>,
    Path((vehicle_id, repair_id)): Path<(i32, i32)>,
    ValidatedJson(request): ValidatedJson<RepairRequest>,
) -> Result<Json<ApiResponse<Repair>>, AppError> {
    let controller = RepairController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.update(vehicle_id, repair_id, request).await?))
}

async fn delete_repair(
    State(state): State<AppState>,
    Path((vehicle_id, repair_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    let controller = RepairController::new(state.pool.clone(), state.pricing);
    controller.delete(vehicle_id, repair_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
