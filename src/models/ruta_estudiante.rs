//! Modelo de RutaEstudiante
//!
//! Entidad asociativa entre una ruta, un estudiante y la parada concreta
//! usada para esa asignación. Las filas se crean y eliminan únicamente a
//! través de la reconciliación de asignaciones; nunca se editan en sitio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Asignación principal - mapea exactamente a la tabla rutas_estudiantes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RutaEstudiante {
    pub id: Uuid,
    pub ruta_id: Uuid,
    pub estudiante_id: Uuid,
    pub parada_id: Uuid,
    pub created_at: DateTime<Utc>,
}
