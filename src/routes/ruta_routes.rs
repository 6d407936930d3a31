use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::ruta_controller::RutaController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::ruta_dto::{
    ActualizarRutaRequest, AsignacionResponse, AsignarEstudiantesRequest, CrearRutaRequest,
    RutaResponse,
};
use crate::services::asignacion_service::{AsignacionService, ResultadoReconciliacion};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ruta_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ruta))
        .route("/", get(list_rutas))
        .route("/:id", get(get_ruta))
        .route("/:id", put(update_ruta))
        .route("/:id", delete(delete_ruta))
        .route("/:id/estudiantes", get(list_estudiantes))
        .route("/:id/estudiantes", post(assign_estudiantes))
}

#[derive(Debug, Deserialize)]
struct ColegioQuery {
    colegio_id: Uuid,
}

async fn create_ruta(
    State(state): State<AppState>,
    Json(request): Json<CrearRutaRequest>,
) -> Result<Json<ApiResponse<RutaResponse>>, AppError> {
    let controller = RutaController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn list_rutas(
    State(state): State<AppState>,
    Query(query): Query<ColegioQuery>,
) -> Result<Json<Vec<RutaResponse>>, AppError> {
    let controller = RutaController::new(state.pool.clone());
    let response = controller.listar_por_colegio(query.colegio_id).await?;
    Ok(Json(response))
}

async fn get_ruta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RutaResponse>, AppError> {
    let controller = RutaController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn update_ruta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarRutaRequest>,
) -> Result<Json<ApiResponse<RutaResponse>>, AppError> {
    let controller = RutaController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn delete_ruta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RutaController::new(state.pool.clone());
    controller.eliminar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ruta eliminada exitosamente"
    })))
}

async fn list_estudiantes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AsignacionResponse>>, AppError> {
    let controller = RutaController::new(state.pool.clone());
    let response = controller.estudiantes(id).await?;
    Ok(Json(response))
}

/// Fijar la lista de estudiantes asignados a la ruta.
///
/// Devuelve 200 también en éxitos parciales: los estudiantes sin parada
/// activa del turno van en `sin_parada`.
async fn assign_estudiantes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AsignarEstudiantesRequest>,
) -> Result<Json<ApiResponse<ResultadoReconciliacion>>, AppError> {
    let service = AsignacionService::new(state.pool.clone());
    let resultado = service.reconciliar(id, request.estudiante_ids).await?;
    Ok(Json(ApiResponse::success(resultado)))
}
