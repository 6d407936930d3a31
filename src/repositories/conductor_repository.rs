//! Repositorio de conductores

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::conductor::Conductor;
use crate::utils::errors::AppError;

pub struct ConductorRepository {
    pool: PgPool,
}

impl ConductorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        colegio_id: Uuid,
        nombre: String,
        apellido: String,
        telefono: Option<String>,
        licencia: String,
    ) -> Result<Conductor, AppError> {
        let id = Uuid::new_v4();

        let conductor = sqlx::query_as::<_, Conductor>(
            r#"
            INSERT INTO conductores (id, colegio_id, nombre, apellido, telefono, licencia, activo, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, true, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(colegio_id)
        .bind(nombre)
        .bind(apellido)
        .bind(telefono)
        .bind(licencia)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating conductor: {}", e)))?;

        Ok(conductor)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Conductor>, AppError> {
        let conductor = sqlx::query_as::<_, Conductor>("SELECT * FROM conductores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding conductor: {}", e)))?;

        Ok(conductor)
    }

    pub async fn find_by_colegio(&self, colegio_id: Uuid) -> Result<Vec<Conductor>, AppError> {
        let conductores = sqlx::query_as::<_, Conductor>(
            "SELECT * FROM conductores WHERE colegio_id = $1 ORDER BY apellido, nombre",
        )
        .bind(colegio_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing conductores: {}", e)))?;

        Ok(conductores)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        apellido: Option<String>,
        telefono: Option<String>,
        licencia: Option<String>,
        activo: Option<bool>,
    ) -> Result<Conductor, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        let conductor = sqlx::query_as::<_, Conductor>(
            r#"
            UPDATE conductores
            SET nombre = $2, apellido = $3, telefono = $4, licencia = $5, activo = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(apellido.unwrap_or(current.apellido))
        .bind(telefono.or(current.telefono))
        .bind(licencia.unwrap_or(current.licencia))
        .bind(activo.unwrap_or(current.activo))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating conductor: {}", e)))?;

        Ok(conductor)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM conductores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting conductor: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Conductor no encontrado".to_string()));
        }

        Ok(())
    }
}
