//! The two kinds of entity a user can mark as a favorite.

/// Target entity kind of a favorite association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Character,
    Planet,
}

impl FavoriteKind {
    /// Entity name used in error messages and logs.
    pub fn entity_name(self) -> &'static str {
        match self {
            FavoriteKind::Character => "Character",
            FavoriteKind::Planet => "Planet",
        }
    }

    /// Name of the target id field in serialized favorites.
    ///
    /// Characters are exposed as "people" over HTTP.
    pub fn id_field(self) -> &'static str {
        match self {
            FavoriteKind::Character => "people_id",
            FavoriteKind::Planet => "planet_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_is_exposed_as_people() {
        assert_eq!(FavoriteKind::Character.id_field(), "people_id");
        assert_eq!(FavoriteKind::Character.entity_name(), "Character");
    }

    #[test]
    fn planet_field_names() {
        assert_eq!(FavoriteKind::Planet.id_field(), "planet_id");
        assert_eq!(FavoriteKind::Planet.entity_name(), "Planet");
    }
}
