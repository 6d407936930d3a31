//! Modelo de Ruta
//!
//! Este módulo contiene el struct Ruta. Una ruta pertenece a un colegio,
//! tiene un turno (recogida o entrega) y un nombre único dentro del colegio.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::parada::TipoParada;

/// Ruta principal - mapea exactamente a la tabla rutas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ruta {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub autobus_id: Option<Uuid>,
    pub conductor_id: Option<Uuid>,
    pub nombre: String,
    pub turno: TipoParada,
    pub hora_salida: NaiveTime,
    pub created_at: DateTime<Utc>,
}
