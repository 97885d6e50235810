//! Middleware de autenticación JWT
//!
//! Este módulo maneja la autenticación JWT, extracción de tokens
//! y verificación de roles de los usuarios autenticados.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    models::auth::UserRole,
    state::AppState,
    utils::{errors::AppError, jwt::extract_token_from_header},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Exigir rol admin
    pub fn require_admin(&self) -> Result<(), AppError> {
        if !self.is_admin() {
            return Err(AppError::Forbidden(
                "Administrator role required".to_string(),
            ));
        }
        Ok(())
    }

    /// Exigir que el usuario sea `user_id` o un admin
    pub fn require_self_or_admin(&self, user_id: i32) -> Result<(), AppError> {
        if self.user_id != user_id && !self.is_admin() {
            return Err(AppError::Forbidden(
                "You can only modify your own account".to_string(),
            ));
        }
        Ok(())
    }
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = state.jwt.validate_token(token)?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| AppError::Unauthorized("Invalid user id in token".to_string()))?;
    let role = claims
        .role
        .parse::<UserRole>()
        .map_err(|_| AppError::Unauthorized("Invalid role in token".to_string()))?;

    // Inyectar usuario autenticado en las extensions
    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        role,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_id: i32, role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id,
            email: "someone@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(user(1, UserRole::Admin).require_admin().is_ok());
        assert!(matches!(
            user(1, UserRole::User).require_admin(),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_self_or_admin() {
        assert!(user(3, UserRole::User).require_self_or_admin(3).is_ok());
        assert!(user(1, UserRole::Admin).require_self_or_admin(3).is_ok());
        assert!(matches!(
            user(2, UserRole::User).require_self_or_admin(3),
            Err(AppError::Forbidden(_))
        ));
    }
}
