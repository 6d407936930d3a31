//! Controller de rutas
//!
//! El nombre de la ruta es único dentro de su colegio y el turno queda
//! fijado en la creación: determina el tipo de parada que usan sus
//! asignaciones.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::ruta_dto::{
    ActualizarRutaRequest, AsignacionResponse, CrearRutaRequest, RutaResponse,
};
use crate::repositories::colegio_repository::ColegioRepository;
use crate::repositories::ruta_estudiante_repository::RutaEstudianteRepository;
use crate::repositories::ruta_repository::RutaRepository;
use crate::utils::errors::{field_validation_error, not_found_error, AppError};
use crate::utils::validation::validate_hora;

pub struct RutaController {
    repository: RutaRepository,
    asignacion_repository: RutaEstudianteRepository,
    colegio_repository: ColegioRepository,
}

impl RutaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RutaRepository::new(pool.clone()),
            asignacion_repository: RutaEstudianteRepository::new(pool.clone()),
            colegio_repository: ColegioRepository::new(pool),
        }
    }

    pub async fn crear(
        &self,
        request: CrearRutaRequest,
    ) -> Result<ApiResponse<RutaResponse>, AppError> {
        request.validate()?;

        let hora_salida =
            validate_hora(&request.hora_salida).map_err(|e| field_validation_error("hora_salida", e))?;

        self.colegio_repository
            .find_by_id(request.colegio_id)
            .await?
            .ok_or_else(|| not_found_error("Colegio", &request.colegio_id.to_string()))?;

        if self
            .repository
            .nombre_exists(request.colegio_id, &request.nombre)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Ya existe una ruta llamada '{}' en este colegio",
                request.nombre
            )));
        }

        let ruta = self
            .repository
            .create(
                request.colegio_id,
                request.nombre,
                request.turno,
                hora_salida,
                request.autobus_id,
                request.conductor_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ruta.into(),
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn obtener(&self, id: Uuid) -> Result<RutaResponse, AppError> {
        let ruta = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ruta", &id.to_string()))?;

        Ok(ruta.into())
    }

    pub async fn listar_por_colegio(&self, colegio_id: Uuid) -> Result<Vec<RutaResponse>, AppError> {
        let rutas = self.repository.find_by_colegio(colegio_id).await?;

        Ok(rutas.into_iter().map(RutaResponse::from).collect())
    }

    pub async fn actualizar(
        &self,
        id: Uuid,
        request: ActualizarRutaRequest,
    ) -> Result<ApiResponse<RutaResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ruta", &id.to_string()))?;

        let hora_salida = match &request.hora_salida {
            Some(hora) => {
                Some(validate_hora(hora).map_err(|e| field_validation_error("hora_salida", e))?)
            }
            None => None,
        };

        if let Some(nombre) = &request.nombre {
            if nombre != &current.nombre
                && self.repository.nombre_exists(current.colegio_id, nombre).await?
            {
                return Err(AppError::Conflict(format!(
                    "Ya existe una ruta llamada '{}' en este colegio",
                    nombre
                )));
            }
        }

        let ruta = self
            .repository
            .update(
                id,
                request.nombre,
                hora_salida,
                request.autobus_id,
                request.conductor_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ruta.into(),
            "Ruta actualizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Asignaciones actuales de la ruta con los datos de cada estudiante y
    /// la parada usada
    pub async fn estudiantes(&self, id: Uuid) -> Result<Vec<AsignacionResponse>, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ruta", &id.to_string()))?;

        let asignaciones = self.asignacion_repository.find_detalle_by_ruta(id).await?;

        Ok(asignaciones
            .into_iter()
            .map(|a| AsignacionResponse {
                estudiante_id: a.estudiante_id,
                codigo: a.codigo,
                nombre: a.nombre,
                apellido: a.apellido,
                parada_id: a.parada_id,
                direccion: a.direccion,
                latitud: a.latitud,
                longitud: a.longitud,
            })
            .collect())
    }
}
