//! Handlers for favorite associations.
//!
//! Each add/remove runs the whole check-then-write sequence of
//! [`holonet_db::favorites`] inside one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use holonet_core::types::DbId;
use holonet_db::favorites::{self, CharacterFavorites, FavoriteTarget, PlanetFavorites};
use holonet_db::models::favorite::{RemovedFavorite, UserFavorites};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /{user_id}/favoritePeople/{people_id}
pub async fn add_character(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<<CharacterFavorites as FavoriteTarget>::Row>)> {
    add::<CharacterFavorites>(&state, user_id, people_id).await
}

/// DELETE /{user_id}/favoritePeople/{people_id}
pub async fn remove_character(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<RemovedFavorite>> {
    remove::<CharacterFavorites>(&state, user_id, people_id).await
}

/// POST /{user_id}/favoritePlanet/{planet_id}
pub async fn add_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<<PlanetFavorites as FavoriteTarget>::Row>)> {
    add::<PlanetFavorites>(&state, user_id, planet_id).await
}

/// DELETE /{user_id}/favoritePlanet/{planet_id}
pub async fn remove_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<RemovedFavorite>> {
    remove::<PlanetFavorites>(&state, user_id, planet_id).await
}

/// GET /user/{user_id}/favorites
///
/// Returns `{"favorite_people": [...], "favorite_planets": [...]}`.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserFavorites>> {
    let mut conn = state.pool.acquire().await?;
    let listed = favorites::list_for_user(&mut conn, user_id).await?;
    Ok(Json(listed))
}

async fn add<T: FavoriteTarget>(
    state: &AppState,
    user_id: DbId,
    target_id: DbId,
) -> AppResult<(StatusCode, Json<T::Row>)> {
    let mut tx = state.pool.begin().await?;
    let row = favorites::add::<T>(&mut tx, user_id, target_id).await?;
    tx.commit().await?;

    tracing::info!(
        user_id,
        target_id,
        kind = T::KIND.entity_name(),
        "Favorite added",
    );

    Ok((StatusCode::CREATED, Json(row)))
}

async fn remove<T: FavoriteTarget>(
    state: &AppState,
    user_id: DbId,
    target_id: DbId,
) -> AppResult<Json<RemovedFavorite>> {
    let mut tx = state.pool.begin().await?;
    let removed = favorites::remove::<T>(&mut tx, user_id, target_id).await?;
    tx.commit().await?;

    tracing::info!(
        user_id,
        target_id,
        kind = T::KIND.entity_name(),
        "Favorite removed",
    );

    Ok(Json(removed))
}
