//! Controller de colegios

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::colegio_dto::{ColegioResponse, CrearColegioRequest};
use crate::dto::common_dto::ApiResponse;
use crate::repositories::colegio_repository::ColegioRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct ColegioController {
    repository: ColegioRepository,
}

impl ColegioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ColegioRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearColegioRequest,
    ) -> Result<ApiResponse<ColegioResponse>, AppError> {
        request.validate()?;

        let colegio = self
            .repository
            .create(request.nombre, request.direccion)
            .await?;

        Ok(ApiResponse::success_with_message(
            colegio.into(),
            "Colegio creado exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<ColegioResponse, AppError> {
        let colegio = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Colegio", &id.to_string()))?;

        Ok(colegio.into())
    }

    pub async fn listar(&self) -> Result<Vec<ColegioResponse>, AppError> {
        let colegios = self.repository.find_all().await?;

        Ok(colegios.into_iter().map(ColegioResponse::from).collect())
    }
}
