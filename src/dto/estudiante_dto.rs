use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::estudiante::Estudiante;

// Request para crear un estudiante
#[derive(Debug, Deserialize, Validate)]
pub struct CrearEstudianteRequest {
    pub colegio_id: Uuid,
    pub padre_id: Option<Uuid>,

    // Código único dentro del colegio (ej: EST0042)
    pub codigo: String,

    #[validate(length(min = 2, max = 100))]
    pub nombre: String,

    #[validate(length(min = 2, max = 100))]
    pub apellido: String,
}

// Request para actualizar un estudiante
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarEstudianteRequest {
    pub padre_id: Option<Uuid>,

    #[validate(length(min = 2, max = 100))]
    pub nombre: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub apellido: Option<String>,

    pub activo: Option<bool>,
}

// Response de estudiante
#[derive(Debug, Serialize)]
pub struct EstudianteResponse {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub padre_id: Option<Uuid>,
    pub codigo: String,
    pub nombre: String,
    pub apellido: String,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Estudiante> for EstudianteResponse {
    fn from(estudiante: Estudiante) -> Self {
        Self {
            id: estudiante.id,
            colegio_id: estudiante.colegio_id,
            padre_id: estudiante.padre_id,
            codigo: estudiante.codigo,
            nombre: estudiante.nombre,
            apellido: estudiante.apellido,
            activo: estudiante.activo,
            created_at: estudiante.created_at,
        }
    }
}
