//! Inventory store module.
//!
//! This crate contains the item/quantity bookkeeping rules: permissive
//! additions, validated removals, low-stock queries, and wholesale JSON
//! persistence. No presentation, no CLI.

pub mod audit;
pub mod store;

pub use audit::AuditEntry;
pub use store::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
