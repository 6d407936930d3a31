use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::autobus_controller::AutobusController;
use crate::dto::autobus_dto::{ActualizarAutobusRequest, AutobusResponse, CrearAutobusRequest};
use crate::dto::common_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_autobus_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_autobus))
        .route("/", get(list_autobuses))
        .route("/:id", get(get_autobus))
        .route("/:id", put(update_autobus))
        .route("/:id", delete(delete_autobus))
}

#[derive(Debug, Deserialize)]
struct ColegioQuery {
    colegio_id: Uuid,
}

async fn create_autobus(
    State(state): State<AppState>,
    Json(request): Json<CrearAutobusRequest>,
) -> Result<Json<ApiResponse<AutobusResponse>>, AppError> {
    let controller = AutobusController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn list_autobuses(
    State(state): State<AppState>,
    Query(query): Query<ColegioQuery>,
) -> Result<Json<Vec<AutobusResponse>>, AppError> {
    let controller = AutobusController::new(state.pool.clone());
    let response = controller.listar_por_colegio(query.colegio_id).await?;
    Ok(Json(response))
}

async fn get_autobus(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AutobusResponse>, AppError> {
    let controller = AutobusController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn update_autobus(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarAutobusRequest>,
) -> Result<Json<ApiResponse<AutobusResponse>>, AppError> {
    let controller = AutobusController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn delete_autobus(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AutobusController::new(state.pool.clone());
    controller.eliminar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Autobús eliminado exitosamente"
    })))
}
