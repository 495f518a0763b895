use axum::routing::post;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Favorite association routes, keyed by user then target.
///
/// ```text
/// POST   /{user_id}/favoritePeople/{people_id}    -> add_character
/// DELETE /{user_id}/favoritePeople/{people_id}    -> remove_character
/// POST   /{user_id}/favoritePlanet/{planet_id}    -> add_planet
/// DELETE /{user_id}/favoritePlanet/{planet_id}    -> remove_planet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/favoritePeople/{people_id}",
            post(favorite::add_character).delete(favorite::remove_character),
        )
        .route(
            "/{user_id}/favoritePlanet/{planet_id}",
            post(favorite::add_planet).delete(favorite::remove_planet),
        )
}
