use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_model_controller::VehicleModelController;
use crate::dto::api_response::ApiResponse;
use crate::dto::catalog_dto::ModelDetailResponse;
use crate::models::trim_level::TrimLevel;
use crate::models::vehicle_model::{VehicleModel, VehicleModelRequest, VehicleModelWithBrand};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_vehicle_model_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_models).post(create_model))
        .route("/:id", get(get_model).put(update_model).delete(delete_model))
        .route("/:id/trim-levels", get(list_model_trim_levels))
}

async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleModelWithBrand>>>, AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ModelDetailResponse>>, AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn list_model_trim_levels(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<TrimLevel>>>, AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    Ok(Json(controller.list_trim_levels(id).await?))
}

async fn create_model(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VehicleModelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleModel>>), AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_model(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<VehicleModelRequest>,
) -> Result<Json<ApiResponse<VehicleModel>>, AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_model(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
