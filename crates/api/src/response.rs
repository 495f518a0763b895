//! Shared response envelope types for API handlers.
//!
//! List endpoints use a `{ "data": [...] }` envelope. Single records are
//! returned bare.

use holonet_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Confirmation body for a deleted entity.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub msg: String,
    pub id: DbId,
}

impl DeletedResponse {
    pub fn new(entity: &str, id: DbId) -> Self {
        Self {
            msg: format!("{entity} {id} deleted"),
            id,
        }
    }
}
