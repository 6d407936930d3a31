//! Servicio de asignación de estudiantes a rutas
//!
//! Converge las asignaciones persistidas de una ruta hacia la lista objetivo
//! de estudiantes que envía el caller: calcula la diferencia mínima contra
//! las asignaciones actuales, aplica primero las bajas y después las altas.
//! Cada alta resuelve la parada activa del estudiante para el turno de la
//! ruta; los estudiantes sin parada activa de ese turno se devuelven en
//! `sin_parada` en lugar de hacer fallar la operación.

use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::repositories::estudiante_repository::EstudianteRepository;
use crate::repositories::parada_repository::ParadaRepository;
use crate::repositories::ruta_estudiante_repository::{NuevaAsignacion, RutaEstudianteRepository};
use crate::repositories::ruta_repository::RutaRepository;
use crate::utils::errors::{not_found_error, AppError};

/// Diferencia mínima entre las asignaciones actuales y la lista objetivo
#[derive(Debug, PartialEq, Eq)]
pub struct DiffAsignaciones {
    pub quitar: Vec<Uuid>,
    pub agregar: Vec<Uuid>,
}

/// Calcular la diferencia por pertenencia a conjunto.
///
/// Un estudiante presente en ambos lados no genera ni baja ni alta; los
/// duplicados de la lista objetivo se ignoran.
pub fn computar_diff(actuales: &[Uuid], objetivo: &[Uuid]) -> DiffAsignaciones {
    let actuales_set: HashSet<Uuid> = actuales.iter().copied().collect();
    let objetivo_set: HashSet<Uuid> = objetivo.iter().copied().collect();

    let quitar: Vec<Uuid> = actuales
        .iter()
        .filter(|id| !objetivo_set.contains(*id))
        .copied()
        .collect();

    let mut vistos = HashSet::new();
    let agregar: Vec<Uuid> = objetivo
        .iter()
        .filter(|id| !actuales_set.contains(*id) && vistos.insert(**id))
        .copied()
        .collect();

    DiffAsignaciones { quitar, agregar }
}

/// Estudiante que no pudo asignarse por no tener parada activa del turno
#[derive(Debug, Clone, Serialize)]
pub struct EstudianteSinParada {
    pub estudiante_id: Uuid,
    pub nombre: String,
}

/// Resultado de una reconciliación; `sin_parada` no vacío es un éxito
/// parcial, no un error
#[derive(Debug, Serialize)]
pub struct ResultadoReconciliacion {
    pub agregados: u64,
    pub quitados: u64,
    pub sin_parada: Vec<EstudianteSinParada>,
}

pub struct AsignacionService {
    ruta_repository: RutaRepository,
    asignacion_repository: RutaEstudianteRepository,
    parada_repository: ParadaRepository,
    estudiante_repository: EstudianteRepository,
}

impl AsignacionService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            ruta_repository: RutaRepository::new(pool.clone()),
            asignacion_repository: RutaEstudianteRepository::new(pool.clone()),
            parada_repository: ParadaRepository::new(pool.clone()),
            estudiante_repository: EstudianteRepository::new(pool),
        }
    }

    /// Reconciliar las asignaciones de la ruta con la lista objetivo.
    ///
    /// Idempotente: repetir la llamada con la misma lista no produce
    /// escrituras adicionales. Las bajas se aplican antes que las altas; el
    /// insert de las altas es una única sentencia. Si ese insert falla, las
    /// bajas ya aplicadas se conservan.
    pub async fn reconciliar(
        &self,
        ruta_id: Uuid,
        objetivo: Vec<Uuid>,
    ) -> Result<ResultadoReconciliacion, AppError> {
        let ruta = self
            .ruta_repository
            .find_by_id(ruta_id)
            .await?
            .ok_or_else(|| not_found_error("Ruta", &ruta_id.to_string()))?;

        let actuales: Vec<Uuid> = self
            .asignacion_repository
            .find_by_ruta(ruta_id)
            .await?
            .into_iter()
            .map(|a| a.estudiante_id)
            .collect();

        let diff = computar_diff(&actuales, &objetivo);

        info!(
            "🔄 Reconciliando ruta '{}' ({}): {} actuales, {} bajas, {} altas",
            ruta.nombre,
            ruta.turno.as_str(),
            actuales.len(),
            diff.quitar.len(),
            diff.agregar.len()
        );

        let quitados = self
            .asignacion_repository
            .delete_por_estudiantes(ruta_id, &diff.quitar)
            .await?;

        let mut nuevas = Vec::new();
        let mut sin_parada = Vec::new();

        for estudiante_id in &diff.agregar {
            let estudiante = self
                .estudiante_repository
                .find_by_id(*estudiante_id)
                .await?
                .ok_or_else(|| not_found_error("Estudiante", &estudiante_id.to_string()))?;

            match self
                .parada_repository
                .find_activa(*estudiante_id, ruta.turno)
                .await?
            {
                Some(parada) => nuevas.push(NuevaAsignacion {
                    estudiante_id: *estudiante_id,
                    parada_id: parada.id,
                }),
                None => {
                    warn!(
                        "⚠️ Estudiante {} sin parada activa de {}",
                        estudiante.codigo,
                        ruta.turno.as_str()
                    );
                    sin_parada.push(EstudianteSinParada {
                        estudiante_id: *estudiante_id,
                        nombre: estudiante.nombre_completo(),
                    });
                }
            }
        }

        let agregados = self.asignacion_repository.insert_lote(ruta_id, &nuevas).await?;

        info!(
            "✅ Ruta '{}' reconciliada: {} altas, {} bajas, {} sin parada",
            ruta.nombre,
            agregados,
            quitados,
            sin_parada.len()
        );

        Ok(ResultadoReconciliacion {
            agregados,
            quitados,
            sin_parada,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_diff_quita_y_agrega() {
        // actuales {A, B, C}, objetivo {B, C, D} => quitar {A}, agregar {D}
        let abc = ids(3);
        let d = Uuid::new_v4();
        let objetivo = vec![abc[1], abc[2], d];

        let diff = computar_diff(&abc, &objetivo);

        assert_eq!(diff.quitar, vec![abc[0]]);
        assert_eq!(diff.agregar, vec![d]);
    }

    #[test]
    fn test_diff_sin_cambios_es_vacio() {
        let actuales = ids(3);
        let diff = computar_diff(&actuales, &actuales.clone());

        assert!(diff.quitar.is_empty());
        assert!(diff.agregar.is_empty());
    }

    #[test]
    fn test_diff_objetivo_vacio_quita_todo() {
        let actuales = ids(2);
        let diff = computar_diff(&actuales, &[]);

        assert_eq!(diff.quitar, actuales);
        assert!(diff.agregar.is_empty());
    }

    #[test]
    fn test_diff_desde_cero_agrega_todo() {
        let objetivo = ids(2);
        let diff = computar_diff(&[], &objetivo);

        assert!(diff.quitar.is_empty());
        assert_eq!(diff.agregar, objetivo);
    }

    #[test]
    fn test_diff_ignora_duplicados_del_objetivo() {
        let a = Uuid::new_v4();
        let diff = computar_diff(&[], &[a, a, a]);

        assert_eq!(diff.agregar, vec![a]);
    }

    #[test]
    fn test_diff_ordena_por_pertenencia_no_por_posicion() {
        // El mismo estudiante en distinta posición no genera cambios
        let actuales = ids(3);
        let mut objetivo = actuales.clone();
        objetivo.reverse();

        let diff = computar_diff(&actuales, &objetivo);

        assert!(diff.quitar.is_empty());
        assert!(diff.agregar.is_empty());
    }
}
