//! Request handlers for the catalog.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers that read before they write open a transaction for the whole
//! request; it rolls back when dropped on any early return.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
