//! Modelo de Repair

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::{validate_amount, validate_not_blank};

/// Repair - línea de coste asociada a un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Repair {
    pub id: i32,
    pub vehicle_id: i32,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub cost: Decimal,
}

/// Request para crear o actualizar una reparación
#[derive(Debug, Deserialize, Validate)]
pub struct RepairRequest {
    #[validate(
        length(max = 200, message = "Repair description cannot exceed 200 characters"),
        custom = "validate_not_blank"
    )]
    pub description: String,

    #[validate(custom = "validate_amount")]
    pub cost: Decimal,
}
