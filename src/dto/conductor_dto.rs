use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::conductor::Conductor;

// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CrearConductorRequest {
    pub colegio_id: Uuid,

    #[validate(length(min = 2, max = 100))]
    pub nombre: String,

    #[validate(length(min = 2, max = 100))]
    pub apellido: String,

    pub telefono: Option<String>,

    #[validate(length(min = 5, max = 50))]
    pub licencia: String,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarConductorRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub apellido: Option<String>,

    pub telefono: Option<String>,

    #[validate(length(min = 5, max = 50))]
    pub licencia: Option<String>,

    pub activo: Option<bool>,
}

// Response de conductor
#[derive(Debug, Serialize)]
pub struct ConductorResponse {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub telefono: Option<String>,
    pub licencia: String,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Conductor> for ConductorResponse {
    fn from(conductor: Conductor) -> Self {
        Self {
            id: conductor.id,
            colegio_id: conductor.colegio_id,
            nombre: conductor.nombre,
            apellido: conductor.apellido,
            telefono: conductor.telefono,
            licencia: conductor.licencia,
            activo: conductor.activo,
            created_at: conductor.created_at,
        }
    }
}
