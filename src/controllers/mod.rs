//! Controllers de la aplicación
//!
//! Cada controller aplica las reglas de negocio de un recurso y delega el
//! acceso a datos en su repositorio.

pub mod autobus_controller;
pub mod colegio_controller;
pub mod conductor_controller;
pub mod estudiante_controller;
pub mod parada_controller;
pub mod ruta_controller;
