use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{favorite, user};
use crate::state::AppState;

/// User routes.
///
/// ```text
/// POST   /user                        -> create
/// GET    /users                       -> list
/// GET    /user/{user_id}              -> get_by_id
/// DELETE /user/{user_id}              -> delete
/// GET    /user/{user_id}/favorites    -> favorite::list_for_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", post(user::create))
        .route("/users", get(user::list))
        .route("/user/{user_id}", get(user::get_by_id).delete(user::delete))
        .route("/user/{user_id}/favorites", get(favorite::list_for_user))
}
