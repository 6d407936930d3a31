//! Modelo de Autobus
//!
//! Este módulo contiene el struct Autobus y mapea exactamente a la tabla
//! autobuses. La matrícula es única dentro de cada colegio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Autobus {
    pub id: Uuid,
    pub colegio_id: Uuid,
    pub matricula: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub capacidad: i32,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}
