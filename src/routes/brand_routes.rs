use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::brand_controller::BrandController;
use crate::dto::api_response::ApiResponse;
use crate::dto::catalog_dto::BrandDetailResponse;
use crate::models::brand::{Brand, BrandRequest, BrandSummary};
use crate::models::vehicle_model::VehicleModel;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_brand_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route("/:id", get(get_brand).put(update_brand).delete(delete_brand))
        .route("/:id/models", get(list_brand_models))
}

async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BrandSummary>>>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BrandDetailResponse>>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn list_brand_models(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<VehicleModel>>>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.list_models(id).await?))
}

async fn create_brand(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BrandRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Brand>>), AppError> {
    let controller = BrandController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<BrandRequest>,
) -> Result<Json<ApiResponse<Brand>>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = BrandController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
