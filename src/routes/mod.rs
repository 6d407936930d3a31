pub mod autobus_routes;
pub mod colegio_routes;
pub mod conductor_routes;
pub mod estudiante_routes;
pub mod parada_routes;
pub mod ruta_routes;
