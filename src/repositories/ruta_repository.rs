//! Repositorio de rutas

use chrono::{NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::parada::TipoParada;
use crate::models::ruta::Ruta;
use crate::utils::errors::AppError;

pub struct RutaRepository {
    pool: PgPool,
}

impl RutaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        colegio_id: Uuid,
        nombre: String,
        turno: TipoParada,
        hora_salida: NaiveTime,
        autobus_id: Option<Uuid>,
        conductor_id: Option<Uuid>,
    ) -> Result<Ruta, AppError> {
        let id = Uuid::new_v4();

        let ruta = sqlx::query_as::<_, Ruta>(
            r#"
            INSERT INTO rutas (id, colegio_id, autobus_id, conductor_id, nombre, turno, hora_salida, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(colegio_id)
        .bind(autobus_id)
        .bind(conductor_id)
        .bind(nombre)
        .bind(turno)
        .bind(hora_salida)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating ruta: {}", e)))?;

        Ok(ruta)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ruta>, AppError> {
        let ruta = sqlx::query_as::<_, Ruta>("SELECT * FROM rutas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding ruta: {}", e)))?;

        Ok(ruta)
    }

    pub async fn find_by_colegio(&self, colegio_id: Uuid) -> Result<Vec<Ruta>, AppError> {
        let rutas = sqlx::query_as::<_, Ruta>(
            "SELECT * FROM rutas WHERE colegio_id = $1 ORDER BY nombre",
        )
        .bind(colegio_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing rutas: {}", e)))?;

        Ok(rutas)
    }

    /// El nombre de la ruta es único dentro de su colegio
    pub async fn nombre_exists(&self, colegio_id: Uuid, nombre: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM rutas WHERE colegio_id = $1 AND nombre = $2)",
        )
        .bind(colegio_id)
        .bind(nombre)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error checking nombre: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        hora_salida: Option<NaiveTime>,
        autobus_id: Option<Uuid>,
        conductor_id: Option<Uuid>,
    ) -> Result<Ruta, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))?;

        let ruta = sqlx::query_as::<_, Ruta>(
            r#"
            UPDATE rutas
            SET nombre = $2, hora_salida = $3, autobus_id = $4, conductor_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(hora_salida.unwrap_or(current.hora_salida))
        .bind(autobus_id.or(current.autobus_id))
        .bind(conductor_id.or(current.conductor_id))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating ruta: {}", e)))?;

        Ok(ruta)
    }

    /// Eliminar una ruta junto con sus asignaciones
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        sqlx::query("DELETE FROM rutas_estudiantes WHERE ruta_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting asignaciones: {}", e)))?;

        let result = sqlx::query("DELETE FROM rutas WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting ruta: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Ruta no encontrada".to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing transaction: {}", e)))?;

        Ok(())
    }
}
