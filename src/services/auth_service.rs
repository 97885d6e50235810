use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::models::auth::TokenPair;
use crate::models::user::{CreateUserRequest, LoginRequest, RefreshTokenRequest, User};
use crate::repositories::user_repository::UserRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{AppError, AppResult};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Hashea una contraseña con bcrypt fuera del runtime async
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

/// Verifica una contraseña contra su hash bcrypt
pub async fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();
    tokio::task::spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(AppError::from)
}

/// Servicio de autenticación
pub struct AuthService {
    repository: UserRepository,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_service,
        }
    }

    /// Registra un usuario; el primero de la base recibe el rol admin
    pub async fn register(&self, request: &CreateUserRequest) -> AppResult<User> {
        let email = request.email.trim();
        if self.repository.email_taken(email, None).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash_password(&request.password).await?;
        let user = self
            .repository
            .create(
                request.firstname.trim(),
                request.lastname.trim(),
                email,
                &password_hash,
            )
            .await?;

        info!("👤 Usuario {} registrado con rol {}", user.id, user.role());
        Ok(user)
    }

    /// Verifica email y contraseña
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = match self.repository.find_by_email(email.trim()).await? {
            Some(user) => user,
            None => {
                warn!("🔒 Intento de login con email desconocido");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        if !verify_password(password, &user.password_hash).await? {
            warn!("🔒 Contraseña incorrecta para el usuario {}", user.id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<TokenPair> {
        let user = self.authenticate(&request.email, &request.password).await?;
        let tokens = self.issue_tokens(&user).await?;

        info!("🔑 Usuario {} autenticado", user.id);
        Ok(tokens)
    }

    /// Emite un nuevo par de tokens a partir de un access token (aunque haya
    /// expirado) y del refresh token guardado
    pub async fn refresh(&self, request: &RefreshTokenRequest) -> AppResult<TokenPair> {
        let token = request.token.trim();
        let refresh_token = request.refresh_token.trim();
        if token.is_empty() || refresh_token.is_empty() {
            return Err(AppError::BadRequest(
                "Token and refresh token are required".to_string(),
            ));
        }

        let claims = self.jwt_service.decode_expired(token)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))?;

        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !user.has_valid_refresh_token(refresh_token, Utc::now()) {
            warn!("🔒 Refresh token inválido para el usuario {}", user.id);
            return Err(AppError::Unauthorized("Invalid refresh token".to_string()));
        }

        let tokens = self.issue_tokens(&user).await?;
        info!("🔄 Tokens renovados para el usuario {}", user.id);
        Ok(tokens)
    }

    /// Genera y persiste un nuevo par de tokens
    async fn issue_tokens(&self, user: &User) -> AppResult<TokenPair> {
        let token = self
            .jwt_service
            .generate_access_token(user.id, &user.email, user.role())?;
        let refresh_token = self.jwt_service.generate_refresh_token();
        let refresh_token_expiry_time = self.jwt_service.refresh_token_expiry(Utc::now())?;

        self.repository
            .update_tokens(user.id, &token, &refresh_token, refresh_token_expiry_time)
            .await?;

        Ok(TokenPair {
            id: user.id,
            token,
            refresh_token,
            refresh_token_expiry_time,
        })
    }
}
