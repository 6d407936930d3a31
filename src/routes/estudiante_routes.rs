use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::estudiante_controller::EstudianteController;
use crate::controllers::parada_controller::ParadaController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::estudiante_dto::{
    ActualizarEstudianteRequest, CrearEstudianteRequest, EstudianteResponse,
};
use crate::dto::parada_dto::{CrearParadaRequest, ParadaResponse};
use crate::models::parada::TipoParada;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_estudiante_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_estudiante))
        .route("/", get(list_estudiantes))
        .route("/:id", get(get_estudiante))
        .route("/:id", put(update_estudiante))
        .route("/:id", delete(deactivate_estudiante))
        .route("/:id/parada", post(create_parada))
        .route("/:id/paradas", get(list_paradas))
        .route("/:id/parada-activa", get(get_parada_activa))
}

#[derive(Debug, Deserialize)]
struct ColegioQuery {
    colegio_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct TipoQuery {
    tipo: TipoParada,
}

async fn create_estudiante(
    State(state): State<AppState>,
    Json(request): Json<CrearEstudianteRequest>,
) -> Result<Json<ApiResponse<EstudianteResponse>>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn list_estudiantes(
    State(state): State<AppState>,
    Query(query): Query<ColegioQuery>,
) -> Result<Json<Vec<EstudianteResponse>>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.listar_por_colegio(query.colegio_id).await?;
    Ok(Json(response))
}

async fn get_estudiante(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EstudianteResponse>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn update_estudiante(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarEstudianteRequest>,
) -> Result<Json<ApiResponse<EstudianteResponse>>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn deactivate_estudiante(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = EstudianteController::new(state.pool.clone());
    controller.desactivar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Estudiante desactivado exitosamente"
    })))
}

async fn create_parada(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CrearParadaRequest>,
) -> Result<Json<ApiResponse<ParadaResponse>>, AppError> {
    let controller = ParadaController::new(state.pool.clone());
    let response = controller.crear(id, request).await?;
    Ok(Json(response))
}

async fn list_paradas(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ParadaResponse>>, AppError> {
    let controller = ParadaController::new(state.pool.clone());
    let response = controller.listar_por_estudiante(id).await?;
    Ok(Json(response))
}

async fn get_parada_activa(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TipoQuery>,
) -> Result<Json<ApiResponse<Option<ParadaResponse>>>, AppError> {
    let controller = ParadaController::new(state.pool.clone());
    let response = controller.activa(id, query.tipo).await?;
    Ok(Json(ApiResponse::success(response)))
}
