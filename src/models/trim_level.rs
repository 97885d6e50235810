//! Modelo de TrimLevel (finition)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// TrimLevel - mapea a la tabla trim_levels
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrimLevel {
    pub id: i32,
    pub model_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// TrimLevel con los nombres de modelo y marca
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrimLevelWithModel {
    pub id: i32,
    pub model_id: i32,
    pub model_name: String,
    pub brand_id: i32,
    pub brand_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear o actualizar una finition
#[derive(Debug, Deserialize, Validate)]
pub struct TrimLevelRequest {
    #[validate(
        length(min = 1, max = 50, message = "Trim level name must be between 1 and 50 characters"),
        custom = "validate_not_blank"
    )]
    pub name: String,

    #[validate(range(min = 1, message = "ID must be greater than 0"))]
    pub model_id: i32,
}
