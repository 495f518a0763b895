/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers never hold a long-lived connection: each request acquires its own
/// connection or transaction from `pool`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: holonet_db::DbPool,
}
