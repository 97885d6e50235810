pub mod brand_repository;
pub mod purchase_repository;
pub mod repair_repository;
pub mod sale_repository;
pub mod trim_level_repository;
pub mod user_repository;
pub mod vehicle_model_repository;
pub mod vehicle_repository;
