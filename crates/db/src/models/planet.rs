//! Planet entity model and DTOs.

use holonet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table.
#[derive(Debug, Clone, FromRow)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub population: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a planet.
#[derive(Debug, Clone, Serialize)]
pub struct PlanetResponse {
    pub id: DbId,
    pub name: String,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub population: Option<i64>,
}

impl From<Planet> for PlanetResponse {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            rotation_period: p.rotation_period,
            orbital_period: p.orbital_period,
            diameter: p.diameter,
            climate: p.climate,
            gravity: p.gravity,
            terrain: p.terrain,
            surface_water: p.surface_water,
            population: p.population,
        }
    }
}

/// DTO for creating a new planet. Unrecognised body fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: Option<String>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub population: Option<i64>,
}
