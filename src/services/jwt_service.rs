use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use tracing::debug;

use crate::config::environment::{EnvironmentConfig, MAX_JWT_EXPIRATION_SECS, MAX_REFRESH_TOKEN_DAYS};
use crate::models::auth::{JwtClaims, UserRole};
use crate::utils::errors::{AppError, AppResult};

/// Bytes aleatorios de un refresh token
const REFRESH_TOKEN_BYTES: usize = 32;

/// Configuración JWT
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
    pub refresh_token_duration: Duration,
}

impl JwtConfig {
    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::seconds(
                config.jwt_expiration.min(MAX_JWT_EXPIRATION_SECS) as i64,
            ),
            refresh_token_duration: Duration::days(
                config.refresh_token_days.clamp(0, MAX_REFRESH_TOKEN_DAYS),
            ),
        }
    }
}

/// Servicio JWT
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self::new(JwtConfig::from_environment(config))
    }

    /// Genera un token de acceso
    pub fn generate_access_token(&self, user_id: i32, email: &str, role: UserRole) -> AppResult<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.config.access_token_duration)
            .ok_or_else(|| AppError::Internal("Access token expiry out of range".to_string()))?;

        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generating access token: {}", e)))
    }

    /// Genera un refresh token opaco (32 bytes aleatorios en base64)
    pub fn generate_refresh_token(&self) -> String {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        STANDARD.encode(bytes)
    }

    /// Fecha de expiración de un refresh token emitido en `now`
    pub fn refresh_token_expiry(&self, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
        now.checked_add_signed(self.config.refresh_token_duration)
            .ok_or_else(|| AppError::Internal("Refresh token expiry out of range".to_string()))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> AppResult<JwtClaims> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("🔒 Token rechazado: {}", e);
                AppError::Jwt(format!("Invalid token: {}", e))
            })
    }

    /// Decodifica un token posiblemente expirado
    ///
    /// Firma y algoritmo se verifican igual que en `validate_token`; solo se
    /// ignora la expiración. Se usa en el flujo de refresh.
    pub fn decode_expired(&self, token: &str) -> AppResult<JwtClaims> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.validate_exp = false;

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("🔒 No se pudo decodificar el token expirado: {}", e);
                AppError::Unauthorized("Invalid token".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> JwtService {
        JwtService::new(JwtConfig {
            secret: secret.to_string(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(1),
            refresh_token_duration: Duration::days(1),
        })
    }

    fn expired_token(secret: &str) -> String {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: "5".to_string(),
            email: "old@example.com".to_string(),
            role: "user".to_string(),
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(3)).timestamp(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = service("test-secret");

        let token = jwt_service
            .generate_access_token(12, "marie@example.com", UserRole::Admin)
            .unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "12");
        assert_eq!(claims.user_id(), Some(12));
        assert_eq!(claims.email, "marie@example.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = service("secret-a")
            .generate_access_token(1, "a@example.com", UserRole::User)
            .unwrap();

        let other = service("secret-b");
        assert!(matches!(other.validate_token(&token), Err(AppError::Jwt(_))));
        assert!(matches!(other.decode_expired(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token_only_decodes_without_lifetime_check() {
        let jwt_service = service("test-secret");
        let token = expired_token("test-secret");

        assert!(jwt_service.validate_token(&token).is_err());

        let claims = jwt_service.decode_expired(&token).unwrap();
        assert_eq!(claims.user_id(), Some(5));
        assert_eq!(claims.email, "old@example.com");
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let claims = JwtClaims {
            sub: "1".to_string(),
            email: "a@example.com".to_string(),
            role: "user".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let jwt_service = service("test-secret");
        assert!(jwt_service.validate_token(&token).is_err());
        assert!(jwt_service.decode_expired(&token).is_err());
    }

    #[test]
    fn test_refresh_token_generation() {
        let jwt_service = service("test-secret");
        let first = jwt_service.generate_refresh_token();
        let second = jwt_service.generate_refresh_token();

        assert_ne!(first, second);
        assert_eq!(STANDARD.decode(&first).unwrap().len(), REFRESH_TOKEN_BYTES);

        let now = Utc::now();
        assert_eq!(jwt_service.refresh_token_expiry(now).unwrap(), now + Duration::days(1));
    }

    #[test]
    fn test_lifetimes_are_bounded() {
        let config = EnvironmentConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: u64::MAX,
            refresh_token_days: 1_000_000_000,
            ..Default::default()
        };
        let jwt_service = JwtService::from_environment(&config);

        let token = jwt_service
            .generate_access_token(3, "c@example.com", UserRole::User)
            .unwrap();
        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!((claims.exp - claims.iat) as u64, MAX_JWT_EXPIRATION_SECS);

        let now = Utc::now();
        assert_eq!(
            jwt_service.refresh_token_expiry(now).unwrap(),
            now + Duration::days(MAX_REFRESH_TOKEN_DAYS)
        );
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let jwt_service = JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::days(100_000_000),
            refresh_token_duration: Duration::days(100_000_000),
        });

        assert!(matches!(
            jwt_service.refresh_token_expiry(Utc::now()),
            Err(AppError::Internal(_))
        ));
        assert!(matches!(
            jwt_service.generate_access_token(1, "a@example.com", UserRole::User),
            Err(AppError::Internal(_))
        ));
    }
}
