use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single stock addition.
///
/// Returned by [`crate::InventoryStore::add`] so callers can keep their own
/// audit trail; the store itself does not retain these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    occurred_at: DateTime<Utc>,
    item: String,
    delta: i64,
}

impl AuditEntry {
    pub(crate) fn added(item: &str, delta: i64) -> Self {
        Self {
            occurred_at: Utc::now(),
            item: item.to_string(),
            delta,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn delta(&self) -> i64 {
        self.delta
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.occurred_at.to_rfc3339(),
            self.delta,
            self.item
        )
    }
}
