//! Handlers for the `/people` resource (characters).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_core::validation::require_text;
use holonet_db::models::character::{CharacterResponse, CreateCharacter};
use holonet_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, DeletedResponse};
use crate::state::AppState;

/// POST /people
///
/// Rejects a missing name (400) and a name that is already taken (400).
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacter>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CharacterResponse>)> {
    let Json(input) = payload?;
    let name = require_text(input.name.as_deref(), "name")?;

    let mut tx = state.pool.begin().await?;

    if CharacterRepo::find_by_name(&mut *tx, name).await?.is_some() {
        return Err(AppError::BadRequest(format!(
            "A character named '{name}' already exists"
        )));
    }

    let character = CharacterRepo::create(&mut *tx, name, &input).await?;
    tx.commit().await?;

    tracing::info!(character_id = character.id, name = %character.name, "Character created");

    Ok((StatusCode::CREATED, Json(character.into())))
}

/// GET /people
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CharacterResponse>>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: characters.into_iter().map(Into::into).collect(),
    }))
}

/// GET /people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterResponse>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character.into()))
}

/// DELETE /people/{id}
///
/// Favorites pointing at the character are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }));
    }

    tracing::info!(character_id = id, "Character deleted");

    Ok(Json(DeletedResponse::new("Character", id)))
}
