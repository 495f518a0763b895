pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /people                                   list, create
/// /people/{id}                              get, delete
///
/// /planets                                  create
/// /planet                                   list
/// /planet/{id}                              get, delete
///
/// /user                                     create
/// /users                                    list
/// /user/{user_id}                           get, delete
/// /user/{user_id}/favorites                 list favorites
///
/// /{user_id}/favoritePeople/{people_id}     add, remove
/// /{user_id}/favoritePlanet/{planet_id}     add, remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(people::router())
        .merge(planets::router())
        .merge(users::router())
        .merge(favorites::router())
}
