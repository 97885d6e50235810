//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! La marca, el modelo y la finition se reciben por nombre y se resuelven
//! contra el catálogo en el repositorio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::utils::validation::{
    validate_image_path, validate_not_blank, validate_vehicle_year, validate_vin,
};

/// Vehicle con los nombres del catálogo ya resueltos (JOIN sobre la tabla vehicles)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleRow {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub vin: Option<String>,
    pub year: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub model_id: i32,
    pub model_name: String,
    pub trim_level_id: Option<i32>,
    pub trim_level_name: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
}

/// Request para crear o reemplazar un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VehicleRequest {
    #[validate(custom = "validate_vin")]
    pub vin: Option<String>,

    #[validate(custom = "validate_vehicle_year")]
    pub year: i32,

    #[validate(
        length(min = 1, max = 50, message = "Brand name must be between 1 and 50 characters"),
        custom = "validate_not_blank"
    )]
    pub brand: String,

    #[validate(
        length(min = 1, max = 50, message = "Model name must be between 1 and 50 characters"),
        custom = "validate_not_blank"
    )]
    pub model: String,

    #[validate(length(max = 50, message = "Trim level name cannot exceed 50 characters"))]
    pub trim_level: Option<String>,

    #[validate(length(max = 150, message = "Description cannot exceed 150 characters"))]
    pub description: Option<String>,

    #[validate(custom = "validate_image_path")]
    pub image_path: Option<String>,
}

impl VehicleRequest {
    pub fn brand_name(&self) -> &str {
        self.brand.trim()
    }

    pub fn model_name(&self) -> &str {
        self.model.trim()
    }

    /// Nombre de la finition; un valor vacío equivale a no tener finition
    pub fn trim_level_name(&self) -> Option<&str> {
        self.trim_level
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Lote de vehículos para la creación masiva (array JSON)
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct VehicleBatch(pub Vec<VehicleRequest>);

impl Validate for VehicleBatch {
    /// Lote no vacío; los errores de cada elemento se indexan por posición
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.0.is_empty() {
            let mut error = ValidationError::new("empty");
            error.message = Some("At least one vehicle is required".into());
            errors.add("vehicles", error);
            return Err(errors);
        }

        let failures: BTreeMap<usize, Box<ValidationErrors>> = self
            .0
            .iter()
            .enumerate()
            .filter_map(|(index, request)| {
                request.validate().err().map(|e| (index, Box::new(e)))
            })
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        errors
            .errors_mut()
            .insert("vehicles", ValidationErrorsKind::List(failures));
        Err(errors)
    }
}
