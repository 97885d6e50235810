//! Modelo de VehicleModel (tabla `models`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// VehicleModel - mapea a la tabla models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleModel {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Modelo con el nombre de su marca
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleModelWithBrand {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear o actualizar un modelo
#[derive(Debug, Deserialize, Validate)]
pub struct VehicleModelRequest {
    #[validate(
        length(min = 1, max = 50, message = "Model name must be between 1 and 50 characters"),
        custom = "validate_not_blank"
    )]
    pub name: String,

    #[validate(range(min = 1, message = "ID must be greater than 0"))]
    pub brand_id: i32,
}
