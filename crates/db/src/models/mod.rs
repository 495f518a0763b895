//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - The `Serialize` projection exposed over HTTP
//!
//! Projections are explicit field whitelists. Row structs that carry
//! internal columns (password hashes, audit timestamps) are never
//! serialized directly.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
