//! Modelo de Colegio

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Colegio {
    pub id: Uuid,
    pub nombre: String,
    pub direccion: Option<String>,
    pub created_at: DateTime<Utc>,
}
