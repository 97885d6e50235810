//! ExpressVoitures API
//!
//! Gestión de un concesionario de vehículos de ocasión: catálogo de marcas,
//! modelos y finitions, vehículos con su compra, reparaciones y venta, y
//! usuarios autenticados con JWT.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
