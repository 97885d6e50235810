use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::brand::Brand;
use crate::models::trim_level::TrimLevel;
use crate::models::vehicle_model::{VehicleModel, VehicleModelWithBrand};

// Marca con sus modelos
#[derive(Debug, Serialize, Deserialize)]
pub struct BrandDetailResponse {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub models: Vec<VehicleModel>,
}

impl BrandDetailResponse {
    pub fn new(brand: Brand, models: Vec<VehicleModel>) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
            created_at: brand.created_at,
            models,
        }
    }
}

// Modelo con su marca y sus finitions
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelDetailResponse {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub trim_levels: Vec<TrimLevel>,
}

impl ModelDetailResponse {
    pub fn new(model: VehicleModelWithBrand, trim_levels: Vec<TrimLevel>) -> Self {
        Self {
            id: model.id,
            brand_id: model.brand_id,
            brand_name: model.brand_name,
            name: model.name,
            created_at: model.created_at,
            trim_levels,
        }
    }
}

// Elemento de catálogo referenciado por un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRef {
    pub id: i32,
    pub name: String,
}
