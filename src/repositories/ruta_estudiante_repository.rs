//! Repositorio de asignaciones ruta-estudiante
//!
//! Las asignaciones solo se crean y eliminan a través de la reconciliación;
//! el insert por lotes es una única sentencia, de modo que todas las filas
//! nuevas entran o ninguna lo hace.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ruta_estudiante::RutaEstudiante;
use crate::utils::errors::AppError;

/// Asignación con los datos del estudiante y su parada
#[derive(Debug, sqlx::FromRow)]
pub struct AsignacionDetalle {
    pub estudiante_id: Uuid,
    pub codigo: String,
    pub nombre: String,
    pub apellido: String,
    pub parada_id: Uuid,
    pub direccion: String,
    pub latitud: f64,
    pub longitud: f64,
}

/// Fila preparada por la reconciliación para el insert por lotes
#[derive(Debug, Clone)]
pub struct NuevaAsignacion {
    pub estudiante_id: Uuid,
    pub parada_id: Uuid,
}

pub struct RutaEstudianteRepository {
    pool: PgPool,
}

impl RutaEstudianteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_ruta(&self, ruta_id: Uuid) -> Result<Vec<RutaEstudiante>, AppError> {
        let asignaciones = sqlx::query_as::<_, RutaEstudiante>(
            "SELECT * FROM rutas_estudiantes WHERE ruta_id = $1",
        )
        .bind(ruta_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing asignaciones: {}", e)))?;

        Ok(asignaciones)
    }

    pub async fn find_detalle_by_ruta(
        &self,
        ruta_id: Uuid,
    ) -> Result<Vec<AsignacionDetalle>, AppError> {
        let asignaciones = sqlx::query_as::<_, AsignacionDetalle>(
            r#"
            SELECT re.estudiante_id, e.codigo, e.nombre, e.apellido,
                   re.parada_id, p.direccion, p.latitud, p.longitud
            FROM rutas_estudiantes re
            JOIN estudiantes e ON e.id = re.estudiante_id
            JOIN paradas p ON p.id = re.parada_id
            WHERE re.ruta_id = $1
            ORDER BY e.apellido, e.nombre
            "#,
        )
        .bind(ruta_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing asignaciones: {}", e)))?;

        Ok(asignaciones)
    }

    /// Eliminar las asignaciones de la ruta para los estudiantes indicados.
    /// Eliminar una asignación inexistente es un no-op.
    pub async fn delete_por_estudiantes(
        &self,
        ruta_id: Uuid,
        estudiante_ids: &[Uuid],
    ) -> Result<u64, AppError> {
        if estudiante_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "DELETE FROM rutas_estudiantes WHERE ruta_id = $1 AND estudiante_id = ANY($2)",
        )
        .bind(ruta_id)
        .bind(estudiante_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error deleting asignaciones: {}", e)))?;

        Ok(result.rows_affected())
    }

    /// Insertar las asignaciones nuevas en una sola sentencia
    pub async fn insert_lote(
        &self,
        ruta_id: Uuid,
        nuevas: &[NuevaAsignacion],
    ) -> Result<u64, AppError> {
        if nuevas.is_empty() {
            return Ok(0);
        }

        let ids: Vec<Uuid> = nuevas.iter().map(|_| Uuid::new_v4()).collect();
        let estudiantes: Vec<Uuid> = nuevas.iter().map(|n| n.estudiante_id).collect();
        let paradas: Vec<Uuid> = nuevas.iter().map(|n| n.parada_id).collect();

        let result = sqlx::query(
            r#"
            INSERT INTO rutas_estudiantes (id, ruta_id, estudiante_id, parada_id, created_at)
            SELECT t.id, $1, t.estudiante_id, t.parada_id, $5
            FROM UNNEST($2::uuid[], $3::uuid[], $4::uuid[]) AS t(id, estudiante_id, parada_id)
            "#,
        )
        .bind(ruta_id)
        .bind(&ids)
        .bind(&estudiantes)
        .bind(&paradas)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error inserting asignaciones: {}", e)))?;

        Ok(result.rows_affected())
    }
}
