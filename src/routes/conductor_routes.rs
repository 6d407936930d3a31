use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::conductor_controller::ConductorController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::conductor_dto::{
    ActualizarConductorRequest, ConductorResponse, CrearConductorRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_conductor_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_conductor))
        .route("/", get(list_conductores))
        .route("/:id", get(get_conductor))
        .route("/:id", put(update_conductor))
        .route("/:id", delete(delete_conductor))
}

#[derive(Debug, Deserialize)]
struct ColegioQuery {
    colegio_id: Uuid,
}

async fn create_conductor(
    State(state): State<AppState>,
    Json(request): Json<CrearConductorRequest>,
) -> Result<Json<ApiResponse<ConductorResponse>>, AppError> {
    let controller = ConductorController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn list_conductores(
    State(state): State<AppState>,
    Query(query): Query<ColegioQuery>,
) -> Result<Json<Vec<ConductorResponse>>, AppError> {
    let controller = ConductorController::new(state.pool.clone());
    let response = controller.listar_por_colegio(query.colegio_id).await?;
    Ok(Json(response))
}

async fn get_conductor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConductorResponse>, AppError> {
    let controller = ConductorController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn update_conductor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarConductorRequest>,
) -> Result<Json<ApiResponse<ConductorResponse>>, AppError> {
    let controller = ConductorController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn delete_conductor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ConductorController::new(state.pool.clone());
    controller.eliminar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Conductor eliminado exitosamente"
    })))
}
