use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::parada::{Parada, SubtipoParada, TipoParada};

// Request para crear una parada de un estudiante
#[derive(Debug, Deserialize, Validate)]
pub struct CrearParadaRequest {
    pub tipo: TipoParada,
    pub subtipo: SubtipoParada,

    #[validate(length(min = 5, max = 500))]
    pub direccion: String,

    pub calle: Option<String>,
    pub numero: Option<String>,

    pub latitud: f64,
    pub longitud: f64,

    // Si no se indica, la parada nueva queda activa
    pub activa: Option<bool>,
}

// Request para actualizar una parada existente
//
// Cambiar tipo/subtipo mueve la parada a otro slot; el slot destino
// debe estar libre.
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarParadaRequest {
    pub tipo: Option<TipoParada>,
    pub subtipo: Option<SubtipoParada>,

    #[validate(length(min = 5, max = 500))]
    pub direccion: Option<String>,

    pub calle: Option<String>,
    pub numero: Option<String>,

    pub latitud: Option<f64>,
    pub longitud: Option<f64>,

    pub activa: Option<bool>,
}

// Response de parada
#[derive(Debug, Serialize)]
pub struct ParadaResponse {
    pub id: Uuid,
    pub estudiante_id: Uuid,
    pub colegio_id: Uuid,
    pub tipo: TipoParada,
    pub subtipo: SubtipoParada,
    pub direccion: String,
    pub calle: Option<String>,
    pub numero: Option<String>,
    pub latitud: f64,
    pub longitud: f64,
    pub activa: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Parada> for ParadaResponse {
    fn from(parada: Parada) -> Self {
        Self {
            id: parada.id,
            estudiante_id: parada.estudiante_id,
            colegio_id: parada.colegio_id,
            tipo: parada.tipo,
            subtipo: parada.subtipo,
            direccion: parada.direccion,
            calle: parada.calle,
            numero: parada.numero,
            latitud: parada.latitud,
            longitud: parada.longitud,
            activa: parada.activa,
            created_at: parada.created_at,
        }
    }
}
