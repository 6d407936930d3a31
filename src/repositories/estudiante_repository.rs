//! Repositorio de estudiantes
//!
//! Los estudiantes nunca se eliminan físicamente: la baja es un soft-delete
//! sobre el flag `activo`.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::estudiante::Estudiante;
use crate::utils::errors::AppError;

pub struct EstudianteRepository {
    pool: PgPool,
}

impl EstudianteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        colegio_id: Uuid,
        padre_id: Option<Uuid>,
        codigo: String,
        nombre: String,
        apellido: String,
    ) -> Result<Estudiante, AppError> {
        let id = Uuid::new_v4();

        let estudiante = sqlx::query_as::<_, Estudiante>(
            r#"
            INSERT INTO estudiantes (id, colegio_id, padre_id, codigo, nombre, apellido, activo, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, true, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(colegio_id)
        .bind(padre_id)
        .bind(codigo)
        .bind(nombre)
        .bind(apellido)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating estudiante: {}", e)))?;

        Ok(estudiante)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Estudiante>, AppError> {
        let estudiante = sqlx::query_as::<_, Estudiante>("SELECT * FROM estudiantes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding estudiante: {}", e)))?;

        Ok(estudiante)
    }

    pub async fn find_by_colegio(&self, colegio_id: Uuid) -> Result<Vec<Estudiante>, AppError> {
        let estudiantes = sqlx::query_as::<_, Estudiante>(
            "SELECT * FROM estudiantes WHERE colegio_id = $1 ORDER BY apellido, nombre",
        )
        .bind(colegio_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing estudiantes: {}", e)))?;

        Ok(estudiantes)
    }

    /// El código de estudiante es único dentro de su colegio
    pub async fn codigo_exists(&self, colegio_id: Uuid, codigo: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM estudiantes WHERE colegio_id = $1 AND codigo = $2)",
        )
        .bind(colegio_id)
        .bind(codigo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error checking codigo: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        padre_id: Option<Uuid>,
        nombre: Option<String>,
        apellido: Option<String>,
        activo: Option<bool>,
    ) -> Result<Estudiante, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estudiante no encontrado".to_string()))?;

        let estudiante = sqlx::query_as::<_, Estudiante>(
            r#"
            UPDATE estudiantes
            SET padre_id = $2, nombre = $3, apellido = $4, activo = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(padre_id.or(current.padre_id))
        .bind(nombre.unwrap_or(current.nombre))
        .bind(apellido.unwrap_or(current.apellido))
        .bind(activo.unwrap_or(current.activo))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating estudiante: {}", e)))?;

        Ok(estudiante)
    }

    /// Soft-delete: marca el estudiante como inactivo
    pub async fn desactivar(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE estudiantes SET activo = false WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deactivating estudiante: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Estudiante no encontrado".to_string()));
        }

        Ok(())
    }
}
