//! Repositorio de paradas
//!
//! Las secuencias que tocan varias filas (desactivar hermanas + escribir la
//! propia, borrado con cascada de asignaciones) se ejecutan dentro de una
//! misma transacción.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::parada::{Parada, SubtipoParada, TipoParada};
use crate::utils::errors::AppError;

pub struct ParadaRepository {
    pool: PgPool,
}

impl ParadaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Parada>, AppError> {
        let parada = sqlx::query_as::<_, Parada>("SELECT * FROM paradas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding parada: {}", e)))?;

        Ok(parada)
    }

    pub async fn find_by_estudiante(&self, estudiante_id: Uuid) -> Result<Vec<Parada>, AppError> {
        let paradas = sqlx::query_as::<_, Parada>(
            "SELECT * FROM paradas WHERE estudiante_id = $1 ORDER BY created_at",
        )
        .bind(estudiante_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing paradas: {}", e)))?;

        Ok(paradas)
    }

    /// Parada activa de un estudiante para un tipo dado, si existe
    pub async fn find_activa(
        &self,
        estudiante_id: Uuid,
        tipo: TipoParada,
    ) -> Result<Option<Parada>, AppError> {
        let parada = sqlx::query_as::<_, Parada>(
            "SELECT * FROM paradas WHERE estudiante_id = $1 AND tipo = $2 AND activa = true",
        )
        .bind(estudiante_id)
        .bind(tipo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error finding parada activa: {}", e)))?;

        Ok(parada)
    }

    /// Crear una parada; si entra activa, desactiva las hermanas del mismo
    /// tipo en la misma transacción
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        estudiante_id: Uuid,
        colegio_id: Uuid,
        tipo: TipoParada,
        subtipo: SubtipoParada,
        direccion: String,
        calle: Option<String>,
        numero: Option<String>,
        latitud: f64,
        longitud: f64,
        activa: bool,
    ) -> Result<Parada, AppError> {
        let id = Uuid::new_v4();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        if activa {
            sqlx::query(
                "UPDATE paradas SET activa = false WHERE estudiante_id = $1 AND tipo = $2",
            )
            .bind(estudiante_id)
            .bind(tipo)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deactivating paradas: {}", e)))?;
        }

        let parada = sqlx::query_as::<_, Parada>(
            r#"
            INSERT INTO paradas (id, estudiante_id, colegio_id, tipo, subtipo, direccion, calle, numero, latitud, longitud, activa, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estudiante_id)
        .bind(colegio_id)
        .bind(tipo)
        .bind(subtipo)
        .bind(direccion)
        .bind(calle)
        .bind(numero)
        .bind(latitud)
        .bind(longitud)
        .bind(activa)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error creating parada: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(parada)
    }

    /// Actualizar una parada; la desactivación de hermanas va en la misma
    /// transacción que la escritura
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        tipo: Option<TipoParada>,
        subtipo: Option<SubtipoParada>,
        direccion: Option<String>,
        calle: Option<String>,
        numero: Option<String>,
        latitud: Option<f64>,
        longitud: Option<f64>,
        activa: Option<bool>,
    ) -> Result<Parada, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        let current = sqlx::query_as::<_, Parada>("SELECT * FROM paradas WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error finding parada: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Parada no encontrada".to_string()))?;

        let tipo_final = tipo.unwrap_or(current.tipo);
        let activa_final = activa.unwrap_or(current.activa);

        if activa_final {
            sqlx::query(
                "UPDATE paradas SET activa = false WHERE estudiante_id = $1 AND tipo = $2 AND id <> $3",
            )
            .bind(current.estudiante_id)
            .bind(tipo_final)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deactivating paradas: {}", e)))?;
        }

        let parada = sqlx::query_as::<_, Parada>(
            r#"
            UPDATE paradas
            SET tipo = $2, subtipo = $3, direccion = $4, calle = $5, numero = $6, latitud = $7, longitud = $8, activa = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(tipo_final)
        .bind(subtipo.unwrap_or(current.subtipo))
        .bind(direccion.unwrap_or(current.direccion))
        .bind(calle.or(current.calle))
        .bind(numero.or(current.numero))
        .bind(latitud.unwrap_or(current.latitud))
        .bind(longitud.unwrap_or(current.longitud))
        .bind(activa_final)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error updating parada: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(parada)
    }

    /// Eliminar una parada junto con las asignaciones de ruta que la referencian
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        sqlx::query("DELETE FROM rutas_estudiantes WHERE parada_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting asignaciones: {}", e)))?;

        let result = sqlx::query("DELETE FROM paradas WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting parada: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Parada no encontrada".to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(())
    }
}
