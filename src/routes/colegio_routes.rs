use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::colegio_controller::ColegioController;
use crate::dto::colegio_dto::{ColegioResponse, CrearColegioRequest};
use crate::dto::common_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_colegio_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_colegio))
        .route("/", get(list_colegios))
        .route("/:id", get(get_colegio))
}

async fn create_colegio(
    State(state): State<AppState>,
    Json(request): Json<CrearColegioRequest>,
) -> Result<Json<ApiResponse<ColegioResponse>>, AppError> {
    let controller = ColegioController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok(Json(response))
}

async fn list_colegios(
    State(state): State<AppState>,
) -> Result<Json<Vec<ColegioResponse>>, AppError> {
    let controller = ColegioController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn get_colegio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ColegioResponse>, AppError> {
    let controller = ColegioController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}
