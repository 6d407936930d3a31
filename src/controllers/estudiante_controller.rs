//! Controller de estudiantes

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::estudiante_dto::{
    ActualizarEstudianteRequest, CrearEstudianteRequest, EstudianteResponse,
};
use crate::repositories::colegio_repository::ColegioRepository;
use crate::repositories::estudiante_repository::EstudianteRepository;
use crate::utils::errors::{field_validation_error, not_found_error, AppError};
use crate::utils::validation::validate_codigo_estudiante;

pub struct EstudianteController {
    repository: EstudianteRepository,
    colegio_repository: ColegioRepository,
}

impl EstudianteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EstudianteRepository::new(pool.clone()),
            colegio_repository: ColegioRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearEstudianteRequest,
    ) -> Result<ApiResponse<EstudianteResponse>, AppError> {
        request.validate()?;

        validate_codigo_estudiante(&request.codigo)
            .map_err(|e| field_validation_error("codigo", e))?;

        self.colegio_repository
            .find_by_id(request.colegio_id)
            .await?
            .ok_or_else(|| not_found_error("Colegio", &request.colegio_id.to_string()))?;

        if self
            .repository
            .codigo_exists(request.colegio_id, &request.codigo)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "El código '{}' ya está registrado en este colegio",
                request.codigo
            )));
        }

        let estudiante = self
            .repository
            .create(
                request.colegio_id,
                request.padre_id,
                request.codigo,
                request.nombre,
                request.apellido,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            estudiante.into(),
            "Estudiante creado exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<EstudianteResponse, AppError> {
        let estudiante = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Estudiante", &id.to_string()))?;

        Ok(estudiante.into())
    }

    pub async fn listar_por_colegio(
        &self,
        colegio_id: Uuid,
    ) -> Result<Vec<EstudianteResponse>, AppError> {
        let estudiantes = self.repository.find_by_colegio(colegio_id).await?;

        Ok(estudiantes.into_iter().map(EstudianteResponse::from).collect())
    }

    pub async fn actualizar(
        &self,
        id: Uuid,
        request: ActualizarEstudianteRequest,
    ) -> Result<ApiResponse<EstudianteResponse>, AppError> {
        request.validate()?;

        let estudiante = self
            .repository
            .update(
                id,
                request.padre_id,
                request.nombre,
                request.apellido,
                request.activo,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            estudiante.into(),
            "Estudiante actualizado exitosamente".to_string(),
        ))
    }

    /// Baja lógica: el estudiante queda inactivo, nunca se elimina
    pub async fn desactivar(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.desactivar(id).await?;
        Ok(())
    }
}
