pub mod advert_controller;
pub mod brand_controller;
pub mod purchase_controller;
pub mod repair_controller;
pub mod sale_controller;
pub mod trim_level_controller;
pub mod user_controller;
pub mod vehicle_controller;
pub mod vehicle_model_controller;
