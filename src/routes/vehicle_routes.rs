use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::{ApiResponse, PagedResponse};
use crate::dto::vehicle_dto::{VehicleDetailResponse, VehicleListQuery};
use crate::models::vehicle::{VehicleBatch, VehicleRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/bulk", post(create_vehicles_bulk))
        .route("/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<Json<ApiResponse<PagedResponse<VehicleDetailResponse>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.list(query).await?))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VehicleDetailResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleDetailResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.pricing);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn create_vehicles_bulk(
    State(state): State<AppState>,
    ValidatedJson(batch): ValidatedJson<VehicleBatch>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<VehicleDetailResponse>>>), AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.pricing);
    let response = controller.create_bulk(batch).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> Result<Json<ApiResponse<VehicleDetailResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.pricing);
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
