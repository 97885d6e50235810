use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::catalog_dto::CatalogRef;
use crate::models::purchase::Purchase;
use crate::models::repair::Repair;
use crate::models::sale::Sale;
use crate::models::vehicle::VehicleRow;
use crate::services::pricing_service::{vehicle_title, PricingService};
use crate::utils::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 25;
pub const MAX_PAGE_SIZE: i64 = 100;

// Query string del listado de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleListQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub brand: Option<String>,
    pub sort_order: Option<String>,
}

/// Criterio de ordenación del listado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleSortOrder {
    #[default]
    Id,
    Year,
    Brand,
    Model,
}

impl VehicleSortOrder {
    /// Valor desconocido o ausente ordena por id
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("year") => VehicleSortOrder::Year,
            Some("brand") => VehicleSortOrder::Brand,
            Some("model") => VehicleSortOrder::Model,
            _ => VehicleSortOrder::Id,
        }
    }

    /// Cláusula ORDER BY; el id desempata
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            VehicleSortOrder::Id => "v.id",
            VehicleSortOrder::Year => "v.year, v.id",
            VehicleSortOrder::Brand => "b.name, v.id",
            VehicleSortOrder::Model => "m.name, v.id",
        }
    }
}

/// Parámetros del listado ya validados
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleListParams {
    pub page_number: i64,
    pub page_size: i64,
    pub brand: Option<String>,
    pub sort_order: VehicleSortOrder,
}

impl VehicleListParams {
    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

impl TryFrom<VehicleListQuery> for VehicleListParams {
    type Error = AppError;

    fn try_from(query: VehicleListQuery) -> AppResult<Self> {
        let page_number = query.page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
        if page_number < 1 {
            return Err(AppError::BadRequest(
                "Page number must be greater than or equal to 1".to_string(),
            ));
        }

        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size < 1 {
            return Err(AppError::BadRequest(
                "Page size must be greater than or equal to 1".to_string(),
            ));
        }
        let page_size = page_size.min(MAX_PAGE_SIZE);

        // El OFFSET tiene que caber en un BIGINT
        if (page_number - 1).checked_mul(page_size).is_none() {
            return Err(AppError::BadRequest("Page number is too large".to_string()));
        }

        let brand = query
            .brand
            .map(|brand| brand.trim().to_string())
            .filter(|brand| !brand.is_empty());

        Ok(Self {
            page_number,
            page_size,
            brand,
            sort_order: VehicleSortOrder::from_param(query.sort_order.as_deref()),
        })
    }
}

// Response de vehículo con compra, venta, reparaciones y precio derivado
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleDetailResponse {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub vin: Option<String>,
    pub year: i32,
    pub brand: CatalogRef,
    pub model: CatalogRef,
    pub trim_level: Option<CatalogRef>,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub purchase: Option<Purchase>,
    pub sale: Option<Sale>,
    pub repairs: Vec<Repair>,
    pub total_repair_cost: Decimal,
    pub sale_price: Option<Decimal>,
    pub margin: Decimal,
}

impl VehicleDetailResponse {
    pub fn new(
        vehicle: VehicleRow,
        purchase: Option<Purchase>,
        sale: Option<Sale>,
        repairs: Vec<Repair>,
        pricing: &PricingService,
    ) -> Self {
        let title = vehicle_title(
            vehicle.year,
            &vehicle.brand_name,
            &vehicle.model_name,
            vehicle.trim_level_name.as_deref(),
        );
        let total_repair_cost = pricing.total_repair_cost(&repairs);
        let sale_price = pricing.sale_price(purchase.as_ref(), &repairs);

        let trim_level = match (vehicle.trim_level_id, vehicle.trim_level_name) {
            (Some(id), Some(name)) => Some(CatalogRef { id, name }),
            _ => None,
        };

        Self {
            id: vehicle.id,
            created_at: vehicle.created_at,
            vin: vehicle.vin,
            year: vehicle.year,
            brand: CatalogRef { id: vehicle.brand_id, name: vehicle.brand_name },
            model: CatalogRef { id: vehicle.model_id, name: vehicle.model_name },
            trim_level,
            title,
            description: vehicle.description,
            image_path: vehicle.image_path,
            purchase,
            sale,
            repairs,
            total_repair_cost,
            sale_price,
            margin: pricing.margin(),
        }
    }
}

// Reparaciones de un vehículo con su total
#[derive(Debug, Serialize, Deserialize)]
pub struct RepairListResponse {
    pub vehicle_id: i32,
    pub repairs: Vec<Repair>,
    pub total_repair_cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query(page_number: Option<i64>, page_size: Option<i64>) -> VehicleListQuery {
        VehicleListQuery { page_number, page_size, ..Default::default() }
    }

    #[test]
    fn test_list_defaults() {
        let params = VehicleListParams::try_from(VehicleListQuery::default()).unwrap();
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, 25);
        assert_eq!(params.brand, None);
        assert_eq!(params.sort_order, VehicleSortOrder::Id);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_list_rejects_invalid_pages() {
        assert!(matches!(
            VehicleListParams::try_from(query(Some(0), None)),
            Err(AppError::BadRequest(msg)) if msg.contains("Page number")
        ));
        assert!(matches!(
            VehicleListParams::try_from(query(None, Some(0))),
            Err(AppError::BadRequest(msg)) if msg.contains("Page size")
        ));
    }

    #[test]
    fn test_page_size_is_capped_and_offset_computed() {
        let params = VehicleListParams::try_from(query(Some(3), Some(500))).unwrap();
        assert_eq!(params.page_size, MAX_PAGE_SIZE);
        assert_eq!(params.offset(), 200);
    }

    #[test]
    fn test_huge_page_number_is_rejected() {
        assert!(matches!(
            VehicleListParams::try_from(query(Some(i64::MAX), Some(25))),
            Err(AppError::BadRequest(msg)) if msg == "Page number is too large"
        ));

        let last = i64::MAX / MAX_PAGE_SIZE + 1;
        let params = VehicleListParams::try_from(query(Some(last), Some(MAX_PAGE_SIZE))).unwrap();
        assert_eq!(params.offset(), (last - 1) * MAX_PAGE_SIZE);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!(VehicleSortOrder::from_param(Some("YEAR")), VehicleSortOrder::Year);
        assert_eq!(VehicleSortOrder::from_param(Some("brand")), VehicleSortOrder::Brand);
        assert_eq!(VehicleSortOrder::from_param(Some("Model")), VehicleSortOrder::Model);
        assert_eq!(VehicleSortOrder::from_param(Some("price")), VehicleSortOrder::Id);
        assert_eq!(VehicleSortOrder::from_param(None), VehicleSortOrder::Id);
        assert_eq!(VehicleSortOrder::Brand.order_by_clause(), "b.name, v.id");
    }

    #[test]
    fn test_blank_brand_filter_is_ignored() {
        let params = VehicleListParams::try_from(VehicleListQuery {
            brand: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.brand, None);
    }

    #[test]
    fn test_detail_response_derives_pricing() {
        let row = VehicleRow {
            id: 7,
            created_at: Utc::now(),
            vin: None,
            year: 2018,
            brand_id: 1,
            brand_name: "Peugeot".to_string(),
            model_id: 2,
            model_name: "308".to_string(),
            trim_level_id: Some(3),
            trim_level_name: Some("GT Line".to_string()),
            description: None,
            image_path: None,
        };
        let purchase = Purchase {
            id: 1,
            vehicle_id: 7,
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            price: Decimal::new(9000, 0),
        };
        let repairs = vec![Repair {
            id: 1,
            vehicle_id: 7,
            created_at: Utc::now(),
            description: "Pneus".to_string(),
            cost: Decimal::new(400, 0),
        }];

        let detail = VehicleDetailResponse::new(
            row,
            Some(purchase),
            None,
            repairs,
            &PricingService::default(),
        );

        assert_eq!(detail.title, "2018 - Peugeot 308 GT Line");
        assert_eq!(detail.total_repair_cost, Decimal::new(400, 0));
        assert_eq!(detail.sale_price, Some(Decimal::new(9900, 0)));
        assert_eq!(detail.trim_level, Some(CatalogRef { id: 3, name: "GT Line".to_string() }));
    }
}
