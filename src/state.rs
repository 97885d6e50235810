//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::jwt_service::JwtService;
use crate::services::pricing_service::PricingService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub jwt: JwtService,
    pub pricing: PricingService,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let jwt = JwtService::from_environment(&config);
        let pricing = PricingService::new(config.sale_margin);

        Self {
            pool,
            config,
            jwt,
            pricing,
        }
    }
}
