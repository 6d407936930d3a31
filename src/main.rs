mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 RutaSegura - Backend de Transporte Escolar");
    info!("=============================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let config = EnvironmentConfig::default();
    let port = config.port;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/colegio", routes::colegio_routes::create_colegio_router())
        .nest("/api/estudiante", routes::estudiante_routes::create_estudiante_router())
        .nest("/api/parada", routes::parada_routes::create_parada_router())
        .nest("/api/ruta", routes::ruta_routes::create_ruta_router())
        .nest("/api/autobus", routes::autobus_routes::create_autobus_router())
        .nest("/api/conductor", routes::conductor_routes::create_conductor_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏫 Endpoints - Colegio:");
    info!("   POST /api/colegio - Registrar colegio");
    info!("   GET  /api/colegio - Listar colegios");
    info!("   GET  /api/colegio/:id - Obtener colegio");
    info!("🎒 Endpoints - Estudiante:");
    info!("   POST /api/estudiante - Crear estudiante");
    info!("   GET  /api/estudiante?colegio_id= - Listar estudiantes");
    info!("   GET  /api/estudiante/:id - Obtener estudiante");
    info!("   PUT  /api/estudiante/:id - Actualizar estudiante");
    info!("   DELETE /api/estudiante/:id - Desactivar estudiante");
    info!("📍 Endpoints - Parada:");
    info!("   POST /api/estudiante/:id/parada - Crear parada del estudiante");
    info!("   GET  /api/estudiante/:id/paradas - Paradas del estudiante");
    info!("   GET  /api/estudiante/:id/parada-activa?tipo= - Parada activa por tipo");
    info!("   GET  /api/parada/:id - Obtener parada");
    info!("   PUT  /api/parada/:id - Actualizar parada");
    info!("   DELETE /api/parada/:id - Eliminar parada");
    info!("🗺️ Endpoints - Ruta:");
    info!("   POST /api/ruta - Crear ruta");
    info!("   GET  /api/ruta?colegio_id= - Listar rutas");
    info!("   GET  /api/ruta/:id - Obtener ruta");
    info!("   PUT  /api/ruta/:id - Actualizar ruta");
    info!("   DELETE /api/ruta/:id - Eliminar ruta");
    info!("   GET  /api/ruta/:id/estudiantes - Estudiantes asignados");
    info!("   POST /api/ruta/:id/estudiantes - Fijar estudiantes asignados");
    info!("🚍 Endpoints - Autobús:");
    info!("   POST /api/autobus - Crear autobús");
    info!("   GET  /api/autobus?colegio_id= - Listar autobuses");
    info!("   GET  /api/autobus/:id - Obtener autobús");
    info!("   PUT  /api/autobus/:id - Actualizar autobús");
    info!("   DELETE /api/autobus/:id - Eliminar autobús");
    info!("🧑 Endpoints - Conductor:");
    info!("   POST /api/conductor - Crear conductor");
    info!("   GET  /api/conductor?colegio_id= - Listar conductores");
    info!("   GET  /api/conductor/:id - Obtener conductor");
    info!("   PUT  /api/conductor/:id - Actualizar conductor");
    info!("   DELETE /api/conductor/:id - Eliminar conductor");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rutasegura",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
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
