//! Utilidades de validación
//!
//! Este módulo contiene los validadores personalizados que usan los DTOs
//! con `#[validate(custom = ...)]` y el extractor `ValidatedJson`.

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use chrono::{Datelike, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::utils::errors::AppError;

/// Primer año de fabricación aceptado para un vehículo
pub const MIN_VEHICLE_YEAR: i32 = 1990;

lazy_static! {
    /// 17 caracteres, mayúsculas y dígitos, sin I, O ni Q
    pub static ref VIN_REGEX: Regex = Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").unwrap();
    pub static ref IMAGE_PATH_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9\s_\\./\-:]+\.(jpg|jpeg|png|gif)$").unwrap();
}

fn error_with_message(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

/// Validar formato de VIN
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    if !VIN_REGEX.is_match(value) {
        let mut error = error_with_message(
            "vin",
            "Please enter a valid 17-character VIN".to_string(),
        );
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que el año esté entre 1990 y el año en curso
pub fn validate_vehicle_year(year: i32) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if year < MIN_VEHICLE_YEAR || year > current_year {
        let mut error = error_with_message(
            "year",
            format!("Year must be between {} and {}", MIN_VEHICLE_YEAR, current_year),
        );
        error.add_param("min".into(), &MIN_VEHICLE_YEAR);
        error.add_param("max".into(), &current_year);
        error.add_param("actual".into(), &year);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + serde::Serialize>(
    value: &T,
) -> Result<(), ValidationError> {
    if *value <= T::zero() {
        let mut error = error_with_message("positive", "Value must be positive".to_string());
        error.add_param("actual".into(), value);
        return Err(error);
    }
    Ok(())
}

/// Validar montos monetarios (precio, coste)
pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    validate_positive(value).map_err(|mut error| {
        error.message = Some(Cow::Borrowed("Amount must be a positive value"));
        error
    })
}

/// Validar que una fecha no esté en el futuro
pub fn validate_not_future(date: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();
    if *date > today {
        let mut error = error_with_message("not_future", "Date cannot be in the future".to_string());
        error.add_param("value".into(), &date.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar la extensión de la imagen del vehículo
pub fn validate_image_path(value: &str) -> Result<(), ValidationError> {
    if !IMAGE_PATH_REGEX.is_match(value) {
        return Err(error_with_message(
            "image_path",
            "Only .jpg, .jpeg, .png and .gif images are allowed".to_string(),
        ));
    }
    Ok(())
}

/// Validar que un string no esté vacío (solo espacios cuenta como vacío)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("not_blank", "Value cannot be blank".to_string()));
    }
    Ok(())
}

/// Extractor JSON que además ejecuta las reglas de `validator`
///
/// Un body ausente o mal formado y un DTO inválido terminan ambos en un
/// `400 Bad Request` con el formato de `AppError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
