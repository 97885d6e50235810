use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::trim_level_controller::TrimLevelController;
use crate::dto::api_response::ApiResponse;
use crate::models::trim_level::{TrimLevel, TrimLevelRequest, TrimLevelWithModel};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_trim_level_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trim_levels).post(create_trim_level))
        .route(
            "/:id",
            get(get_trim_level).put(update_trim_level).delete(delete_trim_level),
        )
}

async fn list_trim_levels(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TrimLevelWithModel>>>, AppError> {
    let controller = TrimLevelController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_trim_level(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TrimLevelWithModel>>, AppError> {
    let controller = TrimLevelController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_trim_level(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TrimLevelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TrimLevel>>), AppError> {
    let controller = TrimLevelController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_trim_level(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<TrimLevelRequest>,
) -> Result<Json<ApiResponse<TrimLevel>>, AppError> {
    let controller = TrimLevelController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_trim_level(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = TrimLevelController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
