//! Controller de autobuses

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::autobus_dto::{ActualizarAutobusRequest, AutobusResponse, CrearAutobusRequest};
use crate::dto::common_dto::ApiResponse;
use crate::repositories::autobus_repository::AutobusRepository;
use crate::utils::errors::{field_validation_error, not_found_error, AppError};
use crate::utils::validation::validate_positive;

pub struct AutobusController {
    repository: AutobusRepository,
}

impl AutobusController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AutobusRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearAutobusRequest,
    ) -> Result<ApiResponse<AutobusResponse>, AppError> {
        request.validate()?;

        validate_positive(request.capacidad)
            .map_err(|e| field_validation_error("capacidad", e))?;

        if self
            .repository
            .matricula_exists(request.colegio_id, &request.matricula)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "La matrícula '{}' ya está registrada en este colegio",
                request.matricula
            )));
        }

        let autobus = self
            .repository
            .create(
                request.colegio_id,
                request.matricula,
                request.marca,
                request.modelo,
                request.capacidad,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            autobus.into(),
            "Autobús creado exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<AutobusResponse, AppError> {
        let autobus = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Autobus", &id.to_string()))?;

        Ok(autobus.into())
    }

    pub async fn listar_por_colegio(
        &self,
        colegio_id: Uuid,
    ) -> Result<Vec<AutobusResponse>, AppError> {
        let autobuses = self.repository.find_by_colegio(colegio_id).await?;

        Ok(autobuses.into_iter().map(AutobusResponse::from).collect())
    }

    pub async fn actualizar(
        &self,
        id: Uuid,
        request: ActualizarAutobusRequest,
    ) -> Result<ApiResponse<AutobusResponse>, AppError> {
        request.validate()?;

        if let Some(capacidad) = request.capacidad {
            validate_positive(capacidad).map_err(|e| field_validation_error("capacidad", e))?;
        }

        let autobus = self
            .repository
            .update(
                id,
                request.matricula,
                request.marca,
                request.modelo,
                request.capacidad,
                request.activo,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            autobus.into(),
            "Autobús actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
