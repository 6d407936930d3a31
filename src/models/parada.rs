//! Modelo de Parada
//!
//! Este módulo contiene el struct Parada (punto de recogida o entrega de un
//! estudiante) y los helpers de slot usados para mantener sus invariantes:
//! a lo sumo una parada por (tipo, subtipo) y a lo sumo una parada activa
//! por tipo para cada estudiante.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de parada - mapea al ENUM tipo_parada
///
/// También se usa como turno de una ruta: una ruta de recogida solo puede
/// asignar paradas de recogida, y viceversa.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "tipo_parada", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TipoParada {
    Recogida,
    Entrega,
}

impl TipoParada {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoParada::Recogida => "recogida",
            TipoParada::Entrega => "entrega",
        }
    }
}

/// Subtipo de parada - mapea al ENUM subtipo_parada
///
/// Cada estudiante dispone de hasta 4 slots: {recogida, entrega} × {principal, familiar}.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "subtipo_parada", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubtipoParada {
    Principal,
    Familiar,
}

impl SubtipoParada {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubtipoParada::Principal => "principal",
            SubtipoParada::Familiar => "familiar",
        }
    }
}

/// Parada principal - mapea exactamente a la tabla paradas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Parada {
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

/// Buscar la parada que ocupa el slot (tipo, subtipo) de un estudiante
pub fn buscar_slot(paradas: &[Parada], tipo: TipoParada, subtipo: SubtipoParada) -> Option<&Parada> {
    paradas.iter().find(|p| p.tipo == tipo && p.subtipo == subtipo)
}

/// Buscar la parada activa de un tipo dado
///
/// Invariante: nunca hay más de una activa por (estudiante, tipo).
pub fn parada_activa(paradas: &[Parada], tipo: TipoParada) -> Option<&Parada> {
    paradas.iter().find(|p| p.tipo == tipo && p.activa)
}

/// Contar las paradas activas de un tipo dado
pub fn contar_activas(paradas: &[Parada], tipo: TipoParada) -> usize {
    paradas.iter().filter(|p| p.tipo == tipo && p.activa).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parada(tipo: TipoParada, subtipo: SubtipoParada, activa: bool) -> Parada {
        Parada {
            id: Uuid::new_v4(),
            estudiante_id: Uuid::new_v4(),
            colegio_id: Uuid::new_v4(),
            tipo,
            subtipo,
            direccion: "Calle 100 #15-20".to_string(),
            calle: Some("Calle 100".to_string()),
            numero: Some("15-20".to_string()),
            latitud: 4.6097,
            longitud: -74.0817,
            activa,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_buscar_slot_ocupado() {
        let paradas = vec![
            parada(TipoParada::Recogida, SubtipoParada::Principal, true),
            parada(TipoParada::Entrega, SubtipoParada::Principal, true),
        ];

        assert!(buscar_slot(&paradas, TipoParada::Recogida, SubtipoParada::Principal).is_some());
        assert!(buscar_slot(&paradas, TipoParada::Recogida, SubtipoParada::Familiar).is_none());
        assert!(buscar_slot(&paradas, TipoParada::Entrega, SubtipoParada::Principal).is_some());
    }

    #[test]
    fn test_parada_activa_por_tipo() {
        let paradas = vec![
            parada(TipoParada::Recogida, SubtipoParada::Principal, false),
            parada(TipoParada::Recogida, SubtipoParada::Familiar, true),
            parada(TipoParada::Entrega, SubtipoParada::Principal, false),
        ];

        let activa = parada_activa(&paradas, TipoParada::Recogida);
        assert!(activa.is_some());
        assert_eq!(activa.map(|p| p.subtipo), Some(SubtipoParada::Familiar));

        // Sin parada activa de entrega: ninguna promoción automática
        assert!(parada_activa(&paradas, TipoParada::Entrega).is_none());
    }

    #[test]
    fn test_contar_activas() {
        let paradas = vec![
            parada(TipoParada::Recogida, SubtipoParada::Principal, true),
            parada(TipoParada::Recogida, SubtipoParada::Familiar, false),
            parada(TipoParada::Entrega, SubtipoParada::Principal, true),
        ];

        assert_eq!(contar_activas(&paradas, TipoParada::Recogida), 1);
        assert_eq!(contar_activas(&paradas, TipoParada::Entrega), 1);
    }
}
