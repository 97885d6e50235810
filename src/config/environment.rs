//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use rust_decimal::Decimal;
use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Errores de configuración
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Vida máxima de un access token: 30 días
pub const MAX_JWT_EXPIRATION_SECS: u64 = 30 * 24 * 3600;

/// Vida máxima de un refresh token
pub const MAX_REFRESH_TOKEN_DAYS: i64 = 365;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    /// Duración del access token en segundos
    pub jwt_expiration: u64,
    pub refresh_token_days: i64,
    pub cors_origins: Vec<String>,
    /// Margen fijo que se suma al precio de compra y reparaciones
    pub sale_margin: Decimal,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            jwt_secret: String::new(),
            jwt_expiration: 3600,
            refresh_token_days: 1,
            cors_origins: Vec::new(),
            sale_margin: Decimal::from(500),
            log_level: tracing::Level::DEBUG,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Cargar la configuración desde una fuente arbitraria (útil para tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            jwt_secret,
            jwt_expiration: parse_in_range(
                &lookup,
                "JWT_EXPIRATION",
                defaults.jwt_expiration,
                1..=MAX_JWT_EXPIRATION_SECS,
            )?,
            refresh_token_days: parse_in_range(
                &lookup,
                "REFRESH_TOKEN_DAYS",
                defaults.refresh_token_days,
                1..=MAX_REFRESH_TOKEN_DAYS,
            )?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            sale_margin: parse_or(&lookup, "SALE_MARGIN", defaults.sale_margin)?,
            log_level: parse_or(&lookup, "LOG_LEVEL", defaults.log_level)?,
        })
    }

    /// Dirección `host:port` en la que escucha el servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parsear una variable opcional, usando el valor por defecto si no existe
pub(crate) fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

/// Como `parse_or`, pero el valor debe caer dentro de `range`
pub(crate) fn parse_in_range<F, T>(
    lookup: &F,
    name: &'static str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd,
{
    let value = parse_or(lookup, name, default)?;
    if !range.contains(&value) {
        return Err(ConfigError::Invalid {
            name,
            value: lookup(name).unwrap_or_default(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_jwt_secret_is_required() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));

        let result = EnvironmentConfig::from_lookup(lookup_from(&[("JWT_SECRET", "  ")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_defaults_applied() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("JWT_SECRET", "secret")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.jwt_expiration, 3600);
        assert_eq!(config.refresh_token_days, 1);
        assert_eq!(config.sale_margin, Decimal::from(500));
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_values_parsed() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "secret"),
            ("PORT", "8080"),
            ("ENVIRONMENT", "production"),
            ("SALE_MARGIN", "750.50"),
            ("CORS_ORIGINS", "http://localhost:3000, https://example.com,"),
            ("LOG_LEVEL", "info"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
        assert_eq!(config.sale_margin, Decimal::new(75050, 2));
        assert_eq!(config.cors_origins, vec!["http://localhost:3000", "https://example.com"]);
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.server_url(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "secret"),
            ("PORT", "not-a-port"),
        ]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid { name: "PORT", value: "not-a-port".to_string() }
        );
    }

    #[test]
    fn test_token_lifetimes_out_of_range_are_errors() {
        for (name, value) in [
            ("REFRESH_TOKEN_DAYS", "1000000000"),
            ("REFRESH_TOKEN_DAYS", "0"),
            ("REFRESH_TOKEN_DAYS", "-3"),
            ("JWT_EXPIRATION", "18446744073709551615"),
            ("JWT_EXPIRATION", "0"),
        ] {
            let result = EnvironmentConfig::from_lookup(lookup_from(&[("JWT_SECRET", "secret"), (name, value)]));
            assert_eq!(
                result.unwrap_err(),
                ConfigError::Invalid { name, value: value.to_string() },
                "{}={}",
                name,
                value
            );
        }
    }

    #[test]
    fn test_token_lifetimes_at_the_limit() {
        let max_expiration = MAX_JWT_EXPIRATION_SECS.to_string();
        let max_days = MAX_REFRESH_TOKEN_DAYS.to_string();
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRATION", &max_expiration),
            ("REFRESH_TOKEN_DAYS", &max_days),
        ]))
        .unwrap();

        assert_eq!(config.jwt_expiration, MAX_JWT_EXPIRATION_SECS);
        assert_eq!(config.refresh_token_days, MAX_REFRESH_TOKEN_DAYS);
    }
}
