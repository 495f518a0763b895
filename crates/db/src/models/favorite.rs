//! Favorite association rows and their projections.

use holonet_core::favorites::FavoriteKind;
use holonet_core::types::{DbId, Timestamp};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// A row from the `favorite_characters` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoriteCharacter {
    pub user_id: DbId,
    #[serde(rename = "people_id")]
    pub character_id: DbId,
    pub added_date: Timestamp,
}

/// A row from the `favorite_planets` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoritePlanet {
    pub user_id: DbId,
    pub planet_id: DbId,
    pub added_date: Timestamp,
}

/// Every favorite a user holds, grouped by target kind.
#[derive(Debug, Clone, Serialize)]
pub struct UserFavorites {
    pub favorite_people: Vec<FavoriteCharacter>,
    pub favorite_planets: Vec<FavoritePlanet>,
}

/// Confirmation payload for a removed favorite.
///
/// Serializes as `{"msg", "user_id", "<kind>_id"}` where the last key
/// follows [`FavoriteKind::id_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedFavorite {
    pub kind: FavoriteKind,
    pub user_id: DbId,
    pub target_id: DbId,
}

impl Serialize for RemovedFavorite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(
            "msg",
            &format!(
                "{} {} removed from favorites of user {}",
                self.kind.entity_name(),
                self.target_id,
                self.user_id
            ),
        )?;
        map.serialize_entry("user_id", &self.user_id)?;
        map.serialize_entry(self.kind.id_field(), &self.target_id)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_planet_uses_planet_id_key() {
        let removed = RemovedFavorite {
            kind: FavoriteKind::Planet,
            user_id: 1,
            target_id: 9,
        };
        let json = serde_json::to_value(removed).unwrap();
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["planet_id"], 9);
        assert_eq!(json["msg"], "Planet 9 removed from favorites of user 1");
    }

    #[test]
    fn favorite_character_serializes_as_people() {
        let row = FavoriteCharacter {
            user_id: 2,
            character_id: 5,
            added_date: chrono::Utc::now(),
        };
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["people_id"], 5);
        assert!(json.get("character_id").is_none());
        assert!(json["added_date"].is_string());
    }
}
