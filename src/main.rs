use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use express_voitures::config::{DatabaseConfig, EnvironmentConfig};
use express_voitures::database::DatabaseConnection;
use express_voitures::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 ExpressVoitures API");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let database_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&database_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.run_migrations().await?;

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints públicos:");
    info!("   GET  /health - Estado del servicio");
    info!("   GET  /api/adverts - Vehículos en venta");
    info!("   POST /api/user/register | /login | /refresh-token");
    info!("🔒 Endpoints protegidos (Bearer JWT):");
    info!("   /api/brand, /api/model, /api/trim-level - Catálogo");
    info!("   /api/vehicle (+ /bulk) - Vehículos");
    info!("   /api/vehicle/:id/purchase | /repair | /sale");
    info!("   /api/user, /api/user/:id - Usuarios");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
