use crate::favorites::FavoriteKind;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("User with id {0} not found")]
    UserNotFound(DbId),

    #[error("{} with id {id} not found", kind.entity_name())]
    TargetNotFound { kind: FavoriteKind, id: DbId },

    #[error(
        "User {user_id} already has {} {target_id} as a favorite",
        kind.entity_name()
    )]
    DuplicateFavorite {
        kind: FavoriteKind,
        user_id: DbId,
        target_id: DbId,
    },

    #[error(
        "User {user_id} does not have {} {target_id} as a favorite",
        kind.entity_name()
    )]
    FavoriteNotFound {
        kind: FavoriteKind,
        user_id: DbId,
        target_id: DbId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_not_found_names_the_entity() {
        let err = CoreError::TargetNotFound {
            kind: FavoriteKind::Planet,
            id: 9,
        };
        assert_eq!(err.to_string(), "Planet with id 9 not found");
    }

    #[test]
    fn duplicate_favorite_names_both_ids() {
        let err = CoreError::DuplicateFavorite {
            kind: FavoriteKind::Character,
            user_id: 1,
            target_id: 4,
        };
        assert_eq!(
            err.to_string(),
            "User 1 already has Character 4 as a favorite"
        );
    }
}
