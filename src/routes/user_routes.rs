use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::user_controller::UserController;
use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::UserResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::TokenPair;
use crate::models::user::{CreateUserRequest, LoginRequest, RefreshTokenRequest, UpdateUserRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

/// Rutas de usuario que no requieren token
pub fn create_public_user_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh-token", post(refresh_token))
}

/// Rutas de usuario protegidas por el middleware de autenticación
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_current_user))
        .route("/:id", get(get_user).put(update_user))
}

async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let controller = UserController::new(state.pool.clone(), state.jwt.clone());
    let response = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<TokenPair>>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.jwt.clone());
    Ok(Json(controller.login(request).await?))
}

async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<ApiResponse<TokenPair>>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.jwt.clone());
    Ok(Json(controller.refresh_token(request).await?))
}

async fn get_current_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.jwt.clone());
    Ok(Json(controller.current(&user).await?))
}

async fn get_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.jwt.clone());
    Ok(Json(controller.get_by_id(&user, id).await?))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.jwt.clone());
    Ok(Json(controller.update(&user, id, request).await?))
}
