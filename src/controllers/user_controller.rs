use sqlx::PgPool;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::UserResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::TokenPair;
use crate::models::user::{CreateUserRequest, LoginRequest, RefreshTokenRequest, UpdateUserRequest};
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::AuthService;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{ensure_valid_id, not_found_error, AppError, AppResult};

pub struct UserController {
    repository: UserRepository,
    auth: AuthService,
}

impl UserController {
    pub fn new(pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            repository: UserRepository::new(pool.clone()),
            auth: AuthService::new(pool, jwt_service),
        }
    }

    pub async fn register(&self, request: CreateUserRequest) -> AppResult<ApiResponse<UserResponse>> {
        let user = self.auth.register(&request).await?;
        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "User registered successfully".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<ApiResponse<TokenPair>> {
        let tokens = self.auth.login(&request).await?;
        Ok(ApiResponse::success(tokens))
    }

    pub async fn refresh_token(&self, request: RefreshTokenRequest) -> AppResult<ApiResponse<TokenPair>> {
        let tokens = self.auth.refresh(&request).await?;
        Ok(ApiResponse::success(tokens))
    }

    /// Usuario del token actual
    pub async fn current(&self, caller: &AuthenticatedUser) -> AppResult<ApiResponse<UserResponse>> {
        let user = self
            .repository
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| not_found_error("User", caller.user_id))?;

        Ok(ApiResponse::success(UserResponse::from(user)))
    }

    pub async fn get_by_id(
        &self,
        caller: &AuthenticatedUser,
        id: i32,
    ) -> AppResult<ApiResponse<UserResponse>> {
        ensure_valid_id(id)?;
        caller.require_admin()?;

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", id))?;

        Ok(ApiResponse::success(UserResponse::from(user)))
    }

    pub async fn update(
        &self,
        caller: &AuthenticatedUser,
        id: i32,
        request: UpdateUserRequest,
    ) -> AppResult<ApiResponse<UserResponse>> {
        ensure_valid_id(id)?;
        caller.require_self_or_admin(id)?;

        let email = request.email.trim();
        if self.repository.email_taken(email, Some(id)).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let user = self
            .repository
            .update(id, request.firstname.trim(), request.lastname.trim(), email)
            .await?
            .ok_or_else(|| not_found_error("User", id))?;

        info!("👤 Usuario {} actualizado por el usuario {}", user.id, caller.user_id);
        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "User updated successfully".to_string(),
        ))
    }
}
