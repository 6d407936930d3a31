//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de una tabla; las secuencias que deben
//! ser atómicas (invariantes de paradas, cascadas de borrado) abren su
//! propia transacción.

pub mod autobus_repository;
pub mod colegio_repository;
pub mod conductor_repository;
pub mod estudiante_repository;
pub mod parada_repository;
pub mod ruta_estudiante_repository;
pub mod ruta_repository;
