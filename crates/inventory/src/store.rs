use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use tracing::{error, info, warn};

use stocktally_core::{StoreError, StoreResult};

use crate::audit::AuditEntry;

/// Threshold used for low-stock listings when the caller has no opinion.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Where inventory state is persisted unless the caller picks a path.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// In-memory item/quantity mapping with JSON persistence.
///
/// Iteration order is insertion order, and the persisted JSON object keeps
/// that order across a save/load round trip. Construct one store per logical
/// inventory; there is no shared global state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    items: IndexMap<String, i64>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, creating the entry at `qty` if absent.
    ///
    /// The name must be non-empty after trimming; otherwise the call is a
    /// logged no-op and `None` is returned. Negative quantities are accepted
    /// without validation (permissive business rule), so a total may sit at
    /// zero or below until a removal deletes it.
    ///
    /// Returns the timestamped audit entry for the mutation.
    pub fn add(&mut self, item: &str, qty: i64) -> Option<AuditEntry> {
        let name = item.trim();
        if name.is_empty() {
            warn!(item, "invalid item name, ignoring add");
            return None;
        }
        *self.items.entry(name.to_string()).or_insert(0) += qty;
        Some(AuditEntry::added(name, qty))
    }

    /// Remove `qty` units of `item`, logging instead of propagating failures.
    ///
    /// The validation contract lives in [`try_remove`](Self::try_remove);
    /// this wrapper reports any error at `error` level and continues.
    pub fn remove(&mut self, item: &str, qty: i64) {
        if let Err(err) = self.try_remove(item, qty) {
            error!(item, qty, error = %err, "failed to remove item");
        }
    }

    /// Remove `qty` units of `item`.
    ///
    /// `qty` must be non-negative. A missing item is a benign no-op, not an
    /// error. When the remaining quantity would be zero or below, the entry
    /// is deleted rather than stored.
    pub fn try_remove(&mut self, item: &str, qty: i64) -> StoreResult<()> {
        if qty < 0 {
            return Err(StoreError::invalid_argument(
                "removal quantity must be non-negative",
            ));
        }
        let Some(current) = self.items.get(item).copied() else {
            info!(item, "item not present, nothing to remove");
            return Ok(());
        };
        let remaining = current - qty;
        if remaining <= 0 {
            self.items.shift_remove(item);
        } else {
            self.items.insert(item.to_string(), remaining);
        }
        Ok(())
    }

    /// Current quantity for `item`; absence is an error the caller handles.
    pub fn get(&self, item: &str) -> StoreResult<i64> {
        self.items
            .get(item)
            .copied()
            .ok_or_else(|| StoreError::not_found(item))
    }

    /// Names of items with quantity strictly below `threshold`, in
    /// insertion order. A negative threshold is an `InvalidArgument` error.
    pub fn low_stock(&self, threshold: i64) -> StoreResult<Vec<String>> {
        if threshold < 0 {
            return Err(StoreError::invalid_argument(
                "threshold must be non-negative",
            ));
        }
        Ok(self
            .items
            .iter()
            .filter(|&(_, &qty)| qty < threshold)
            .map(|(name, _)| name.clone())
            .collect())
    }

    /// Persist the whole mapping to `path` as a pretty-printed JSON object
    /// (2-space indentation, UTF-8, non-ASCII names written literally).
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.items)?;
        writer.flush()?;
        Ok(())
    }

    /// Replace the whole mapping with the JSON object at `path`.
    ///
    /// No merging: on success the previous contents are gone. A missing file
    /// is `NotFound`, malformed JSON is `Parse`; on any error the store is
    /// left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StoreError::not_found(path.display().to_string()),
            _ => StoreError::Io(err),
        })?;
        self.items = serde_json::from_reader(BufReader::new(file))?;
        Ok(())
    }

    /// Entries as `(name, quantity)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(name, &qty)| (name.as_str(), qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
