use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::autobus::Autobus;

// Request para crear un autobús
#[derive(Debug, Deserialize, Validate)]
pub struct CrearAutobusRequest {
    pub colegio_id: Uuid,

    #[validate(length(min = 5, max = 20))]
    pub matricula: String,

    pub marca: Option<String>,
    pub modelo: Option<String>,

    pub capacidad: i32,
}

// Request para actualizar un autobús
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarAutobusRequest {
    #[validate(length(min = 5, max = 20))]
    pub matricula: Option<String>,

    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub capacidad: Option<i32>,
    pub activo: Option<bool>,
}

// Response de autobús
#[derive(Debug, Serialize)]
pub struct AutobusResponse {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub matricula: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub capacidad: i32,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Autobus> for AutobusResponse {
    fn from(autobus: Autobus) -> Self {
        Self {
            id: autobus.id,
            colegio_id: autobus.colegio_id,
            matricula: autobus.matricula,
            marca: autobus.marca,
            modelo: autobus.modelo,
            capacidad: autobus.capacidad,
            activo: autobus.activo,
            created_at: autobus.created_at,
        }
    }
}
