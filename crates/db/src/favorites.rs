//! The favorites association store.
//!
//! [`add`] and [`remove`] run their checks in a fixed order:
//!
//! 1. the user exists ([`CoreError::UserNotFound`])
//! 2. the target exists ([`CoreError::TargetNotFound`])
//! 3. the association row is absent for `add` ([`CoreError::DuplicateFavorite`])
//!    or present for `remove` ([`CoreError::FavoriteNotFound`])
//!
//! so a missing resource is always reported before a conflict. All steps take
//! the same connection; callers pass the request transaction so the checks and
//! the write see one snapshot. The composite primary key on each junction
//! table remains the authoritative duplicate guard: a unique violation from the
//! insert is reported as [`CoreError::DuplicateFavorite`] too.

use holonet_core::error::CoreError;
use holonet_core::favorites::FavoriteKind;
use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection};

use crate::models::favorite::{FavoriteCharacter, FavoritePlanet, RemovedFavorite, UserFavorites};
use crate::repositories::{FavoriteRepo, UserRepo};

/// Error returned by the association store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An expected domain outcome (not found, duplicate).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage-layer failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Describes one junction table and the entity table it points at.
pub trait FavoriteTarget: Send + Sync + 'static {
    /// Association row type.
    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin;

    const KIND: FavoriteKind;
    /// Junction table name.
    const TABLE: &'static str;
    /// Foreign key column referencing [`Self::TARGET_TABLE`].
    const TARGET_COLUMN: &'static str;
    /// Entity table holding the favorited records.
    const TARGET_TABLE: &'static str;
}

/// User to character favorites (`favorite_characters`).
pub struct CharacterFavorites;

impl FavoriteTarget for CharacterFavorites {
    type Row = FavoriteCharacter;

    const KIND: FavoriteKind = FavoriteKind::Character;
    const TABLE: &'static str = "favorite_characters";
    const TARGET_COLUMN: &'static str = "character_id";
    const TARGET_TABLE: &'static str = "characters";
}

/// User to planet favorites (`favorite_planets`).
pub struct PlanetFavorites;

impl FavoriteTarget for PlanetFavorites {
    type Row = FavoritePlanet;

    const KIND: FavoriteKind = FavoriteKind::Planet;
    const TABLE: &'static str = "favorite_planets";
    const TARGET_COLUMN: &'static str = "planet_id";
    const TARGET_TABLE: &'static str = "planets";
}

/// Mark `target_id` as a favorite of `user_id`.
pub async fn add<T: FavoriteTarget>(
    conn: &mut PgConnection,
    user_id: DbId,
    target_id: DbId,
) -> Result<T::Row, StoreError> {
    ensure_parents_exist::<T>(conn, user_id, target_id).await?;

    let duplicate = CoreError::DuplicateFavorite {
        kind: T::KIND,
        user_id,
        target_id,
    };

    if FavoriteRepo::find::<T, _>(&mut *conn, user_id, target_id)
        .await?
        .is_some()
    {
        return Err(duplicate.into());
    }

    match FavoriteRepo::insert::<T, _>(&mut *conn, user_id, target_id).await {
        Ok(row) => Ok(row),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::debug!(
                user_id,
                target_id,
                kind = T::KIND.entity_name(),
                "Concurrent favorite insert lost the race"
            );
            Err(duplicate.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Remove `target_id` from the favorites of `user_id`.
///
/// Removing a favorite that does not exist is an error, not a no-op.
pub async fn remove<T: FavoriteTarget>(
    conn: &mut PgConnection,
    user_id: DbId,
    target_id: DbId,
) -> Result<RemovedFavorite, StoreError> {
    ensure_parents_exist::<T>(conn, user_id, target_id).await?;

    let removed = FavoriteRepo::delete::<T, _>(&mut *conn, user_id, target_id).await?;
    if !removed {
        return Err(CoreError::FavoriteNotFound {
            kind: T::KIND,
            user_id,
            target_id,
        }
        .into());
    }

    Ok(RemovedFavorite {
        kind: T::KIND,
        user_id,
        target_id,
    })
}

/// Both favorite lists for a user.
pub async fn list_for_user(
    conn: &mut PgConnection,
    user_id: DbId,
) -> Result<UserFavorites, StoreError> {
    if !UserRepo::exists(&mut *conn, user_id).await? {
        return Err(CoreError::UserNotFound(user_id).into());
    }

    let favorite_people =
        FavoriteRepo::list_for_user::<CharacterFavorites, _>(&mut *conn, user_id).await?;
    let favorite_planets =
        FavoriteRepo::list_for_user::<PlanetFavorites, _>(&mut *conn, user_id).await?;

    Ok(UserFavorites {
        favorite_people,
        favorite_planets,
    })
}

async fn ensure_parents_exist<T: FavoriteTarget>(
    conn: &mut PgConnection,
    user_id: DbId,
    target_id: DbId,
) -> Result<(), StoreError> {
    if !UserRepo::exists(&mut *conn, user_id).await? {
        return Err(CoreError::UserNotFound(user_id).into());
    }
    if !FavoriteRepo::target_exists::<T, _>(&mut *conn, target_id).await? {
        return Err(CoreError::TargetNotFound {
            kind: T::KIND,
            id: target_id,
        }
        .into());
    }
    Ok(())
}
