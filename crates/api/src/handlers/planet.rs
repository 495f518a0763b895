//! Handlers for the planet resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_core::validation::require_text;
use holonet_db::models::planet::{CreatePlanet, PlanetResponse};
use holonet_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, DeletedResponse};
use crate::state::AppState;

/// POST /planets
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanet>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PlanetResponse>)> {
    let Json(input) = payload?;
    let name = require_text(input.name.as_deref(), "name")?;

    let mut tx = state.pool.begin().await?;

    if PlanetRepo::find_by_name(&mut *tx, name).await?.is_some() {
        return Err(AppError::BadRequest(format!(
            "A planet named '{name}' already exists"
        )));
    }

    let planet = PlanetRepo::create(&mut *tx, name, &input).await?;
    tx.commit().await?;

    tracing::info!(planet_id = planet.id, name = %planet.name, "Planet created");

    Ok((StatusCode::CREATED, Json(planet.into())))
}

/// GET /planet
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PlanetResponse>>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: planets.into_iter().map(Into::into).collect(),
    }))
}

/// GET /planet/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlanetResponse>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))?;
    Ok(Json(planet.into()))
}

/// DELETE /planet/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    if !PlanetRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }));
    }

    tracing::info!(planet_id = id, "Planet deleted");

    Ok(Json(DeletedResponse::new("Planet", id)))
}
