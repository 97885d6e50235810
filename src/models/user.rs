//! Modelo de User
//!
//! Este módulo contiene el struct User (tabla `users`) y los
//! requests de registro, login, actualización y refresh de token.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

use crate::models::auth::UserRole;
use crate::utils::validation::validate_not_blank;

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub refresh_token_expiry_time: Option<DateTime<Utc>>,
}

impl User {
    /// Rol tipado; un valor desconocido en base de datos se trata como `user`
    pub fn role(&self) -> UserRole {
        self.role.parse().unwrap_or(UserRole::User)
    }

    /// Verificar que el refresh token coincide y no ha expirado
    pub fn has_valid_refresh_token(&self, refresh_token: &str, now: DateTime<Utc>) -> bool {
        match (&self.refresh_token, self.refresh_token_expiry_time) {
            (Some(stored), Some(expiry)) => stored == refresh_token && expiry > now,
            _ => false,
        }
    }
}

/// Request para registrar un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 100, message = "Firstname must be between 3 and 100 characters"))]
    pub firstname: String,

    #[validate(length(min = 3, max = 100, message = "Lastname must be between 3 and 100 characters"))]
    pub lastname: String,

    #[validate(email(message = "Invalid Email Address"), length(max = 100))]
    pub email: String,

    #[validate(length(min = 6, max = 255, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid Email Address"))]
    pub email: String,

    #[validate(length(min = 6, max = 255, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Request para actualizar un usuario existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 100, message = "Firstname must be between 3 and 100 characters"))]
    pub firstname: String,

    #[validate(length(min = 3, max = 100, message = "Lastname must be between 3 and 100 characters"))]
    pub lastname: String,

    #[validate(email(message = "Invalid Email Address"), length(max = 100))]
    pub email: String,
}

/// Request para refrescar el access token
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(custom = "validate_not_blank")]
    pub token: String,

    #[validate(custom = "validate_not_blank")]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user_with_refresh(token: Option<&str>, expiry: Option<DateTime<Utc>>) -> User {
        User {
            id: 1,
            created_at: Utc::now(),
            firstname: "Jean".to_string(),
            lastname: "Dupont".to_string(),
            email: "jean.dupont@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: "admin".to_string(),
            token: None,
            refresh_token: token.map(str::to_string),
            refresh_token_expiry_time: expiry,
        }
    }

    #[test]
    fn test_typed_role_falls_back_to_user() {
        let mut user = user_with_refresh(None, None);
        assert_eq!(user.role(), UserRole::Admin);
        user.role = "garbage".to_string();
        assert_eq!(user.role(), UserRole::User);
    }

    #[test]
    fn test_refresh_token_validity() {
        let now = Utc::now();
        let user = user_with_refresh(Some("abc"), Some(now + Duration::hours(2)));
        assert!(user.has_valid_refresh_token("abc", now));
        assert!(!user.has_valid_refresh_token("other", now));

        let expired = user_with_refresh(Some("abc"), Some(now - Duration::seconds(1)));
        assert!(!expired.has_valid_refresh_token("abc", now));

        let missing = user_with_refresh(None, None);
        assert!(!missing.has_valid_refresh_token("abc", now));
    }

    #[test]
    fn test_create_user_request_validation() {
        let request = CreateUserRequest {
            firstname: "Jo".to_string(),
            lastname: "Dupont".to_string(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("firstname"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("lastname"));
    }
}
