//! Repositorio de colegios

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::colegio::Colegio;
use crate::utils::errors::AppError;

pub struct ColegioRepository {
    pool: PgPool,
}

impl ColegioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        direccion: Option<String>,
    ) -> Result<Colegio, AppError> {
        let id = Uuid::new_v4();

        let colegio = sqlx::query_as::<_, Colegio>(
            r#"
            INSERT INTO colegios (id, nombre, direccion, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(direccion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating colegio: {}", e)))?;

        Ok(colegio)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Colegio>, AppError> {
        let colegio = sqlx::query_as::<_, Colegio>("SELECT * FROM colegios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding colegio: {}", e)))?;

        Ok(colegio)
    }

    pub async fn find_all(&self) -> Result<Vec<Colegio>, AppError> {
        let colegios = sqlx::query_as::<_, Colegio>("SELECT * FROM colegios ORDER BY nombre")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing colegios: {}", e)))?;

        Ok(colegios)
    }
}
