pub mod api_response;
pub mod auth_dto;
pub mod catalog_dto;
pub mod vehicle_dto;

pub use api_response::{ApiResponse, PagedResponse};
