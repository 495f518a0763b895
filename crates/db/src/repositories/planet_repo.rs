//! Repository for the `planets` table.

use holonet_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::planet::{CreatePlanet, Planet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rotation_period, orbital_period, diameter, climate, gravity, \
                       terrain, surface_water, population, created_at, updated_at";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    ///
    /// `name` is the validated name; `input.name` is ignored.
    pub async fn create<'e, E>(
        executor: E,
        name: &str,
        input: &CreatePlanet,
    ) -> Result<Planet, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO planets
                (name, rotation_period, orbital_period, diameter, climate, gravity,
                 terrain, surface_water, population)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(name)
            .bind(input.rotation_period)
            .bind(input.orbital_period)
            .bind(input.diameter)
            .bind(&input.climate)
            .bind(&input.gravity)
            .bind(&input.terrain)
            .bind(input.surface_water)
            .bind(input.population)
            .fetch_one(executor)
            .await
    }

    /// Find a planet by its internal ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Planet>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find the oldest planet with exactly this name.
    pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Planet>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query =
            format!("SELECT {COLUMNS} FROM planets WHERE name = $1 ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List all planets in insertion order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Planet>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id ASC");
        sqlx::query_as::<_, Planet>(&query).fetch_all(executor).await
    }

    /// Permanently delete a planet. Favorite rows cascade.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
