//! Modelo de Estudiante
//!
//! Este módulo contiene el struct Estudiante. Los estudiantes se desactivan
//! con el flag `activo`, nunca se eliminan físicamente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estudiante principal - mapea exactamente a la tabla estudiantes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Estudiante {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub padre_id: Option<Uuid>,
    pub codigo: String,
    pub nombre: String,
    pub apellido: String,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

impl Estudiante {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}
