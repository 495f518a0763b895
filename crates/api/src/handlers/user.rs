//! Handlers for users.
//!
//! Passwords are hashed with Argon2id before they reach the database and
//! are never part of any response.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_core::validation::require_all;
use holonet_db::models::user::{CreateUser, CreateUserRequest, UserResponse};
use holonet_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::password::hash_password;
use crate::response::{DataResponse, DeletedResponse};
use crate::state::AppState;

/// POST /user
///
/// Requires `username`, `email` and `password`. A user sharing the email or
/// the username is a conflict (409).
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let Json(input) = payload?;
    require_all(&[
        ("username", input.username.as_deref()),
        ("email", input.email.as_deref()),
        ("password", input.password.as_deref()),
    ])?;

    let username = input.username.as_deref().unwrap_or_default().trim();
    let email = input.email.as_deref().unwrap_or_default().trim();
    let password = input.password.as_deref().unwrap_or_default();

    let mut tx = state.pool.begin().await?;

    if UserRepo::find_by_email_or_username(&mut *tx, email, username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with that email or username is already registered".into(),
        )));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash,
    };

    let user = UserRepo::create(&mut *tx, &create_dto).await?;
    tx.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: users.into_iter().map(Into::into).collect(),
    }))
}

/// GET /user/{user_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::UserNotFound(user_id)))?;
    Ok(Json(user.into()))
}

/// DELETE /user/{user_id}
///
/// The user's favorites are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    if !UserRepo::delete(&state.pool, user_id).await? {
        return Err(AppError::Core(CoreError::UserNotFound(user_id)));
    }

    tracing::info!(user_id, "User deleted");

    Ok(Json(DeletedResponse::new("User", user_id)))
}
