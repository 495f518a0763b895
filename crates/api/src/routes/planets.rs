use axum::routing::{get, post};
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Planet routes.
///
/// Creation is on the plural path while reads use the singular one.
///
/// ```text
/// POST   /planets        -> create
/// GET    /planet         -> list
/// GET    /planet/{id}    -> get_by_id
/// DELETE /planet/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", post(planet::create))
        .route("/planet", get(planet::list))
        .route("/planet/{id}", get(planet::get_by_id).delete(planet::delete))
}
