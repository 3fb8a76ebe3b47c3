use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hotel_booking::config::{DatabaseConfig, EnvironmentConfig};
use hotel_booking::database::{seed::seed_sample_rooms, DatabaseConnection};
use hotel_booking::repositories::InMemoryStore;
use hotel_booking::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏨 Hotel Booking API");
    info!("===================");

    let config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Inicializar almacenamiento
    let app_state = match db_config.url.as_deref() {
        Some(url) => {
            let connection = match DatabaseConnection::new(&db_config, url).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            AppState::with_postgres(connection.pool().clone(), config.clone())
        }
        None => {
            warn!("⚠️ DATABASE_URL no definida, usando almacenamiento en memoria (los datos no persisten)");
            AppState::with_store(InMemoryStore::new(), config.clone())
        }
    };

    if config.seed_sample_data {
        seed_sample_rooms(app_state.rooms.as_ref()).await?;
    }

    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.server_url()).await?;
    let addr = listener.local_addr()?;

    info!("🌐 Servidor iniciando en http://{} ({})", addr, config.environment);
    if config.is_development() {
        info!("🔍 Endpoints disponibles:");
        info!("   GET  /health - Health check");
        info!("   GET  /api/rooms - Listar habitaciones");
        info!("   GET  /api/rooms/:id - Obtener habitación");
        info!("   GET  /api/availability?check_in&check_out&num_guests - Disponibilidad");
        info!("   POST /api/reservations - Crear reserva");
        info!("   GET  /api/reservations - Listar reservas");
        info!("   GET  /api/reservations/:id - Obtener reserva");
    }

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
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
