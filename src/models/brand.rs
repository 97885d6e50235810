//! Modelo de Brand
//!
//! Primer nivel de la clasificación de vehículos: Brand → Model → TrimLevel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Brand - mapea exactamente a la tabla brands
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Brand con el número de modelos asociados (listado)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandSummary {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub model_count: i64,
}

/// Request para crear o renombrar una marca
#[derive(Debug, Deserialize, Validate)]
pub struct BrandRequest {
    #[validate(
        length(min = 1, max = 50, message = "Brand name must be between 1 and 50 characters"),
        custom = "validate_not_blank"
    )]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_request_validation() {
        assert!(BrandRequest { name: "Renault".to_string() }.validate().is_ok());
        assert!(BrandRequest { name: "".to_string() }.validate().is_err());
        assert!(BrandRequest { name: "   ".to_string() }.validate().is_err());
        assert!(BrandRequest { name: "x".repeat(51) }.validate().is_err());
    }
}
