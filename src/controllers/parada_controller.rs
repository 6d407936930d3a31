//! Controller de paradas
//!
//! Aplica las reglas de slot sobre las paradas de un estudiante: cada slot
//! (tipo, subtipo) admite una sola parada, y activar una parada desactiva a
//! sus hermanas del mismo tipo. Un slot ocupado en el alta es un conflicto;
//! el caller debe editar la parada existente.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::parada_dto::{ActualizarParadaRequest, CrearParadaRequest, ParadaResponse};
use crate::models::parada::{buscar_slot, TipoParada};
use crate::repositories::estudiante_repository::EstudianteRepository;
use crate::repositories::parada_repository::ParadaRepository;
use crate::utils::errors::{field_validation_error, not_found_error, AppError};
use crate::utils::validation::validate_coordinates;

pub struct ParadaController {
    repository: ParadaRepository,
    estudiante_repository: EstudianteRepository,
}

impl ParadaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ParadaRepository::new(pool.clone()),
            estudiante_repository: EstudianteRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        estudiante_id: Uuid,
        request: CrearParadaRequest,
    ) -> Result<ApiResponse<ParadaResponse>, AppError> {
        request.validate()?;

        validate_coordinates(request.latitud, request.longitud)
            .map_err(|e| field_validation_error("coordenadas", e))?;

        let estudiante = self
            .estudiante_repository
            .find_by_id(estudiante_id)
            .await?
            .ok_or_else(|| not_found_error("Estudiante", &estudiante_id.to_string()))?;

        // Cada slot (tipo, subtipo) admite una sola parada
        let existentes = self.repository.find_by_estudiante(estudiante_id).await?;
        if buscar_slot(&existentes, request.tipo, request.subtipo).is_some() {
            return Err(AppError::Conflict(format!(
                "Ya existe una parada de {}/{} para este estudiante; edita la parada existente",
                request.tipo.as_str(),
                request.subtipo.as_str()
            )));
        }

        let parada = self
            .repository
            .create(
                estudiante_id,
                estudiante.colegio_id,
                request.tipo,
                request.subtipo,
                request.direccion,
                request.calle,
                request.numero,
                request.latitud,
                request.longitud,
                request.activa.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            parada.into(),
            "Parada creada exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<ParadaResponse, AppError> {
        let parada = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Parada", &id.to_string()))?;

        Ok(parada.into())
    }

    pub async fn listar_por_estudiante(
        &self,
        estudiante_id: Uuid,
    ) -> Result<Vec<ParadaResponse>, AppError> {
        self.estudiante_repository
            .find_by_id(estudiante_id)
            .await?
            .ok_or_else(|| not_found_error("Estudiante", &estudiante_id.to_string()))?;

        let paradas = self.repository.find_by_estudiante(estudiante_id).await?;

        Ok(paradas.into_iter().map(ParadaResponse::from).collect())
    }

    /// Parada activa de un estudiante para un tipo; None si no hay ninguna
    pub async fn activa(
        &self,
        estudiante_id: Uuid,
        tipo: TipoParada,
    ) -> Result<Option<ParadaResponse>, AppError> {
        self.estudiante_repository
            .find_by_id(estudiante_id)
            .await?
            .ok_or_else(|| not_found_error("Estudiante", &estudiante_id.to_string()))?;

        let parada = self.repository.find_activa(estudiante_id, tipo).await?;

        Ok(parada.map(ParadaResponse::from))
    }

    pub async fn actualizar(
        &self,
        id: Uuid,
        request: ActualizarParadaRequest,
    ) -> Result<ApiResponse<ParadaResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Parada", &id.to_string()))?;

        let latitud = request.latitud.unwrap_or(current.latitud);
        let longitud = request.longitud.unwrap_or(current.longitud);
        validate_coordinates(latitud, longitud)
            .map_err(|e| field_validation_error("coordenadas", e))?;

        // Mover la parada de slot exige que el slot destino esté libre
        let tipo = request.tipo.unwrap_or(current.tipo);
        let subtipo = request.subtipo.unwrap_or(current.subtipo);
        if tipo != current.tipo || subtipo != current.subtipo {
            let existentes = self.repository.find_by_estudiante(current.estudiante_id).await?;
            if buscar_slot(&existentes, tipo, subtipo).is_some() {
                return Err(AppError::Conflict(format!(
                    "Ya existe una parada de {}/{} para este estudiante",
                    tipo.as_str(),
                    subtipo.as_str()
                )));
            }
        }

        let parada = self
            .repository
            .update(
                id,
                request.tipo,
                request.subtipo,
                request.direccion,
                request.calle,
                request.numero,
                request.latitud,
                request.longitud,
                request.activa,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            parada.into(),
            "Parada actualizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
