use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::advert_controller::AdvertController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::VehicleDetailResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_advert_router() -> Router<AppState> {
    Router::new().route("/", get(list_adverts))
}

async fn list_adverts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleDetailResponse>>>, AppError> {
    let controller = AdvertController::new(state.pool.clone(), state.pricing);
    Ok(Json(controller.list().await?))
}
