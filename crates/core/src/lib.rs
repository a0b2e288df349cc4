//! `stocktally-core` — shared foundation for the stocktally workspace.
//!
//! Currently this is just the error taxonomy; it lives in its own crate so
//! that every layer (store, CLI) agrees on one failure vocabulary.

pub mod error;

pub use error::{StoreError, StoreResult};
