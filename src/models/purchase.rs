//! Modelo de Purchase (compra del vehículo por el concesionario)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::{validate_amount, validate_not_future};

/// Purchase - mapea a la tabla purchases (una por vehículo)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: NaiveDate,
    pub price: Decimal,
}

/// Request para registrar o corregir una compra
#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseRequest {
    #[validate(custom = "validate_not_future")]
    pub date: NaiveDate,

    #[validate(custom = "validate_amount")]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_purchase_request_validation() {
        let today = Utc::now().date_naive();
        let valid = PurchaseRequest { date: today, price: Decimal::new(850000, 2) };
        assert!(valid.validate().is_ok());

        let future = PurchaseRequest { date: today + Duration::days(2), price: Decimal::new(8500, 0) };
        assert!(future.validate().unwrap_err().field_errors().contains_key("date"));

        let free = PurchaseRequest { date: today, price: Decimal::ZERO };
        assert!(free.validate().unwrap_err().field_errors().contains_key("price"));
    }
}
