use axum::{
    extract::{Path, State},
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::parada_controller::ParadaController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::parada_dto::{ActualizarParadaRequest, ParadaResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_parada_router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_parada))
        .route("/:id", put(update_parada))
        .route("/:id", delete(delete_parada))
}

async fn get_parada(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ParadaResponse>, AppError> {
    let controller = ParadaController::new(state.pool.clone());
    let response = controller.obtener(id).await?;
    Ok(Json(response))
}

async fn update_parada(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarParadaRequest>,
) -> Result<Json<ApiResponse<ParadaResponse>>, AppError> {
    let controller = ParadaController::new(state.pool.clone());
    let response = controller.actualizar(id, request).await?;
    Ok(Json(response))
}

async fn delete_parada(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ParadaController::new(state.pool.clone());
    controller.eliminar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Parada eliminada exitosamente"
    })))
}
