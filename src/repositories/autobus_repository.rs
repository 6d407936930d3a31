//! Repositorio de autobuses

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::autobus::Autobus;
use crate::utils::errors::AppError;

pub struct AutobusRepository {
    pool: PgPool,
}

impl AutobusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        colegio_id: Uuid,
        matricula: String,
        marca: Option<String>,
        modelo: Option<String>,
        capacidad: i32,
    ) -> Result<Autobus, AppError> {
        let id = Uuid::new_v4();

        let autobus = sqlx::query_as::<_, Autobus>(
            r#"
            INSERT INTO autobuses (id, colegio_id, matricula, marca, modelo, capacidad, activo, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, true, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(colegio_id)
        .bind(matricula)
        .bind(marca)
        .bind(modelo)
        .bind(capacidad)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating autobus: {}", e)))?;

        Ok(autobus)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Autobus>, AppError> {
        let autobus = sqlx::query_as::<_, Autobus>("SELECT * FROM autobuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding autobus: {}", e)))?;

        Ok(autobus)
    }

    pub async fn find_by_colegio(&self, colegio_id: Uuid) -> Result<Vec<Autobus>, AppError> {
        let autobuses = sqlx::query_as::<_, Autobus>(
            "SELECT * FROM autobuses WHERE colegio_id = $1 ORDER BY matricula",
        )
        .bind(colegio_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing autobuses: {}", e)))?;

        Ok(autobuses)
    }

    pub async fn matricula_exists(
        &self,
        colegio_id: Uuid,
        matricula: &str,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM autobuses WHERE colegio_id = $1 AND matricula = $2)",
        )
        .bind(colegio_id)
        .bind(matricula)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error checking matricula: {}", e)))?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        matricula: Option<String>,
        marca: Option<String>,
        modelo: Option<String>,
        capacidad: Option<i32>,
        activo: Option<bool>,
    ) -> Result<Autobus, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Autobús no encontrado".to_string()))?;

        let autobus = sqlx::query_as::<_, Autobus>(
            r#"
            UPDATE autobuses
            SET matricula = $2, marca = $3, modelo = $4, capacidad = $5, activo = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(matricula.unwrap_or(current.matricula))
        .bind(marca.or(current.marca))
        .bind(modelo.or(current.modelo))
        .bind(capacidad.unwrap_or(current.capacidad))
        .bind(activo.unwrap_or(current.activo))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating autobus: {}", e)))?;

        Ok(autobus)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM autobuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting autobus: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Autobús no encontrado".to_string()));
        }

        Ok(())
    }
}
