//! Services module
//!
//! Este módulo contiene la lógica de negocio que no pertenece a un único
//! repositorio: autenticación, tokens JWT y cálculo de precios.

pub mod auth_service;
pub mod jwt_service;
pub mod pricing_service;

pub use auth_service::AuthService;
pub use jwt_service::JwtService;
pub use pricing_service::PricingService;
