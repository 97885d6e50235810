//! Servicio de precios
//!
//! Cálculo del coste de reparaciones y del precio de venta derivado:
//! `precio de compra + reparaciones + margen`.

use rust_decimal::Decimal;

use crate::models::purchase::Purchase;
use crate::models::repair::Repair;
use crate::utils::errors::{AppError, AppResult};

/// Margen por defecto del concesionario
pub const DEFAULT_SALE_MARGIN: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Servicio de precios
#[derive(Debug, Clone, Copy)]
pub struct PricingService {
    margin: Decimal,
}

impl PricingService {
    pub fn new(margin: Decimal) -> Self {
        Self { margin }
    }

    pub fn margin(&self) -> Decimal {
        self.margin
    }

    /// Suma de los costes de reparación (0 sin reparaciones)
    pub fn total_repair_cost(&self, repairs: &[Repair]) -> Decimal {
        repairs.iter().map(|repair| repair.cost).sum()
    }

    /// Precio mínimo de venta: compra + reparaciones + margen
    pub fn minimum_sale_price(&self, purchase_price: Decimal, repairs: &[Repair]) -> Decimal {
        purchase_price + self.total_repair_cost(repairs) + self.margin
    }

    /// Precio de venta derivado; `None` si el vehículo no tiene compra
    pub fn sale_price(&self, purchase: Option<&Purchase>, repairs: &[Repair]) -> Option<Decimal> {
        purchase.map(|purchase| self.minimum_sale_price(purchase.price, repairs))
    }

    /// Verificar que un precio de venta cubre el precio mínimo
    pub fn ensure_sale_price(
        &self,
        price: Decimal,
        purchase: Option<&Purchase>,
        repairs: &[Repair],
    ) -> AppResult<()> {
        if let Some(minimum) = self.floor_shortfall(price, purchase, repairs) {
            return Err(AppError::BadRequest(format!(
                "Sale price must be at least {} (purchase price + repairs + margin)",
                minimum
            )));
        }
        Ok(())
    }

    /// Precio mínimo que `price` no alcanza, si lo hay
    pub fn floor_shortfall(
        &self,
        price: Decimal,
        purchase: Option<&Purchase>,
        repairs: &[Repair],
    ) -> Option<Decimal> {
        self.sale_price(purchase, repairs)
            .filter(|minimum| price < *minimum)
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new(DEFAULT_SALE_MARGIN)
    }
}

/// Título de un vehículo: "{año} - {marca} {modelo} {finition}"
pub fn vehicle_title(year: i32, brand: &str, model: &str, trim_level: Option<&str>) -> String {
    match trim_level {
        Some(trim_level) if !trim_level.trim().is_empty() => {
            format!("{} - {} {} {}", year, brand, model, trim_level)
        }
        _ => format!("{} - {} {}", year, brand, model),
    }
}
