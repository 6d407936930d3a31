//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod autobus;
pub mod colegio;
pub mod conductor;
pub mod estudiante;
pub mod parada;
pub mod ruta;
pub mod ruta_estudiante;
