//! Modelo de Conductor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Conductor {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub telefono: Option<String>,
    pub licencia: String,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

impl Conductor {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}
