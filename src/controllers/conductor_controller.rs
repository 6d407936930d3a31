//! Controller de conductores

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::conductor_dto::{
    ActualizarConductorRequest, ConductorResponse, CrearConductorRequest,
};
use crate::repositories::conductor_repository::ConductorRepository;
use crate::utils::errors::{field_validation_error, not_found_error, AppError};
use crate::utils::validation::validate_telefono;

pub struct ConductorController {
    repository: ConductorRepository,
}

impl ConductorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ConductorRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearConductorRequest,
    ) -> Result<ApiResponse<ConductorResponse>, AppError> {
        request.validate()?;

        if let Some(telefono) = &request.telefono {
            validate_telefono(telefono).map_err(|e| field_validation_error("telefono", e))?;
        }

        let conductor = self
            .repository
            .create(
                request.colegio_id,
                request.nombre,
                request.apellido,
                request.telefono,
                request.licencia,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            conductor.into(),
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<ConductorResponse, AppError> {
        let conductor = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Conductor", &id.to_string()))?;

        Ok(conductor.into())
    }

    pub async fn listar_por_colegio(
        &self,
        colegio_id: Uuid,
    ) -> Result<Vec<ConductorResponse>, AppError> {
        let conductores = self.repository.find_by_colegio(colegio_id).await?;

        Ok(conductores.into_iter().map(ConductorResponse::from).collect())
    }

    pub async fn actualizar(
        &self,
        id: Uuid,
        request: ActualizarConductorRequest,
    ) -> Result<ApiResponse<ConductorResponse>, AppError> {
        request.validate()?;

        if let Some(telefono) = &request.telefono {
            validate_telefono(telefono).map_err(|e| field_validation_error("telefono", e))?;
        }

        let conductor = self
            .repository
            .update(
                id,
                request.nombre,
                request.apellido,
                request.telefono,
                request.licencia,
                request.activo,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            conductor.into(),
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
