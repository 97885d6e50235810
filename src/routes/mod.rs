//! Router de la aplicación
//!
//! Rutas públicas (health, anuncios, registro, login y refresh) y rutas
//! protegidas por el middleware JWT, todas bajo /api salvo /health.

pub mod advert_routes;
pub mod brand_routes;
pub mod purchase_routes;
pub mod repair_routes;
pub mod sale_routes;
pub mod trim_level_routes;
pub mod user_routes;
pub mod vehicle_model_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Construye el router completo con sus capas
pub fn create_app(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health_check))
        .nest("/api/adverts", advert_routes::create_advert_router())
        .nest("/api/user", user_routes::create_public_user_router());

    let protected = Router::new()
        .nest("/api/brand", brand_routes::create_brand_router())
        .nest("/api/model", vehicle_model_routes::create_vehicle_model_router())
        .nest("/api/trim-level", trim_level_routes::create_trim_level_router())
        .nest(
            "/api/vehicle",
            vehicle_routes::create_vehicle_router()
                .merge(purchase_routes::create_purchase_router())
                .merge(repair_routes::create_repair_router())
                .merge(sale_routes::create_sale_router()),
        )
        .nest("/api/user", user_routes::create_user_router())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let cors = cors_layer(&state.config.cors_origins);

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
