use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Character routes. Characters are exposed as "people".
///
/// ```text
/// GET    /people         -> list
/// POST   /people         -> create
/// GET    /people/{id}    -> get_by_id
/// DELETE /people/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(character::list).post(character::create))
        .route(
            "/people/{id}",
            get(character::get_by_id).delete(character::delete),
        )
}
