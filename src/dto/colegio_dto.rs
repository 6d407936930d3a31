use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::colegio::Colegio;

// Request para registrar un colegio
#[derive(Debug, Deserialize, Validate)]
pub struct CrearColegioRequest {
    #[validate(length(min = 3, max = 200))]
    pub nombre: String,

    pub direccion: Option<String>,
}

// Response de colegio
#[derive(Debug, Serialize)]
pub struct ColegioResponse {
    pub id: Uuid,
    pub nombre: String,
    pub direccion: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Colegio> for ColegioResponse {
    fn from(colegio: Colegio) -> Self {
        Self {
            id: colegio.id,
            nombre: colegio.nombre,
            direccion: colegio.direccion,
            created_at: colegio.created_at,
        }
    }
}
