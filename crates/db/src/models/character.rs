//! Character entity model and DTOs.
//!
//! Characters are exposed as "people" over HTTP.

use holonet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a character.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterResponse {
    pub id: DbId,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl From<Character> for CharacterResponse {
    fn from(c: Character) -> Self {
        Self {
            id: c.id,
            name: c.name,
            height: c.height,
            mass: c.mass,
            hair_color: c.hair_color,
            skin_color: c.skin_color,
            eye_color: c.eye_color,
            birth_year: c.birth_year,
            gender: c.gender,
        }
    }
}

/// DTO for creating a new character. Unrecognised body fields are ignored.
///
/// `name` is optional here so a missing value can be reported as a
/// validation error; the repository takes the validated name separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCharacter {
    pub name: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}
