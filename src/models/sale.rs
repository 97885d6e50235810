//! Modelo de Sale (mise en vente y vente du véhicule)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::utils::validation::{validate_amount, validate_not_blank};

/// Sale - mapea a la tabla sales (una por vehículo)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i32,
    pub vehicle_id: i32,
    pub created_at: DateTime<Utc>,
    pub availability_date: NaiveDate,
    pub sale_date: Option<NaiveDate>,
    pub price: Decimal,
    pub title: String,
    pub description: Option<String>,
}

/// Request para publicar o actualizar una venta
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_sale_dates", skip_on_field_errors = false))]
pub struct SaleRequest {
    pub availability_date: NaiveDate,

    pub sale_date: Option<NaiveDate>,

    #[validate(custom = "validate_amount")]
    pub price: Decimal,

    #[validate(
        length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"),
        custom = "validate_not_blank"
    )]
    pub title: String,

    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,
}

/// La fecha de venta no puede ser anterior a la de disponibilidad
fn validate_sale_dates(request: &SaleRequest) -> Result<(), ValidationError> {
    if let Some(sale_date) = request.sale_date {
        if sale_date < request.availability_date {
            let mut error = ValidationError::new("sale_date");
            error.message = Some("Sale date cannot be before the availability date".into());
            return Err(error);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(sale_date: Option<NaiveDate>) -> SaleRequest {
        SaleRequest {
            availability_date: date(2024, 3, 1),
            sale_date,
            price: Decimal::new(9500, 0),
            title: "Renault Clio 2019".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_sale_date_not_before_availability() {
        assert!(request(None).validate().is_ok());
        assert!(request(Some(date(2024, 3, 1))).validate().is_ok());
        assert!(request(Some(date(2024, 4, 15))).validate().is_ok());

        let errors = request(Some(date(2024, 2, 28))).validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn test_title_is_required() {
        let mut blank = request(None);
        blank.title = "  ".to_string();
        assert!(blank.validate().unwrap_err().field_errors().contains_key("title"));
    }
}
