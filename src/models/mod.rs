//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, junto con los requests validados de cada entidad.

pub mod auth;
pub mod brand;
pub mod purchase;
pub mod repair;
pub mod sale;
pub mod trim_level;
pub mod user;
pub mod vehicle;
pub mod vehicle_model;
