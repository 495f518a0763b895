//! Repository for the `characters` table.

use holonet_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::character::{Character, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, height, mass, hair_color, skin_color, eye_color, \
                       birth_year, gender, created_at, updated_at";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// `name` is passed separately because it has already been validated;
    /// `input.name` is ignored.
    pub async fn create<'e, E>(
        executor: E,
        name: &str,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO characters
                (name, height, mass, hair_color, skin_color, eye_color, birth_year, gender)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(name)
            .bind(input.height)
            .bind(input.mass)
            .bind(&input.hair_color)
            .bind(&input.skin_color)
            .bind(&input.eye_color)
            .bind(&input.birth_year)
            .bind(&input.gender)
            .fetch_one(executor)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Character>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find the oldest character with exactly this name.
    pub async fn find_by_name<'e, E>(
        executor: E,
        name: &str,
    ) -> Result<Option<Character>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query =
            format!("SELECT {COLUMNS} FROM characters WHERE name = $1 ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, Character>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List all characters in insertion order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Character>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query)
            .fetch_all(executor)
            .await
    }

    /// Permanently delete a character. Favorite rows cascade.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
