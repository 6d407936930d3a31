use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::parada::TipoParada;
use crate::models::ruta::Ruta;

// Request para crear una ruta
//
// El turno queda fijado al crear la ruta: determina qué tipo de parada
// usan sus asignaciones.
#[derive(Debug, Deserialize, Validate)]
pub struct CrearRutaRequest {
    pub colegio_id: Uuid,

    #[validate(length(min = 3, max = 100))]
    pub nombre: String,

    pub turno: TipoParada,

    // Formato HH:MM
    pub hora_salida: String,

    pub autobus_id: Option<Uuid>,
    pub conductor_id: Option<Uuid>,
}

// Request para actualizar una ruta existente
#[derive(Debug, Deserialize, Validate)]
pub struct ActualizarRutaRequest {
    #[validate(length(min = 3, max = 100))]
    pub nombre: Option<String>,

    pub hora_salida: Option<String>,

    pub autobus_id: Option<Uuid>,
    pub conductor_id: Option<Uuid>,
}

// Request para fijar la lista de estudiantes asignados a la ruta
#[derive(Debug, Deserialize)]
pub struct AsignarEstudiantesRequest {
    pub estudiante_ids: Vec<Uuid>,
}

// Response de ruta
#[derive(Debug, Serialize)]
pub struct RutaResponse {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub autobus_id: Option<Uuid>,
    pub conductor_id: Option<Uuid>,
    pub nombre: String,
    pub turno: TipoParada,
    pub hora_salida: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl From<Ruta> for RutaResponse {
    fn from(ruta: Ruta) -> Self {
        Self {
            id: ruta.id,
            colegio_id: ruta.colegio_id,
            autobus_id: ruta.autobus_id,
            conductor_id: ruta.conductor_id,
            nombre: ruta.nombre,
            turno: ruta.turno,
            hora_salida: ruta.hora_salida,
            created_at: ruta.created_at,
        }
    }
}

// Response de una asignación de la ruta (estudiante + parada usada)
#[derive(Debug, Serialize)]
pub struct AsignacionResponse {
    pub estudiante_id: Uuid,
    pub codigo: String,
    pub nombre: String,
    pub apellido: String,
    pub parada_id: Uuid,
    pub direccion: String,
    pub latitud: f64,
    pub longitud: f64,
}
