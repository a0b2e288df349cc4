//! Inventory report rendering. Pure formatting, never errors.

use std::fmt::Write;

use stocktally_inventory::InventoryStore;

/// Render a human-readable report: a header followed by one
/// `name -> quantity` line per entry, in insertion order.
pub fn render_report(store: &InventoryStore) -> String {
    let mut out = String::from("Items Report\n");
    for (name, qty) in store.iter() {
        let _ = writeln!(out, "{name} -> {qty}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_renders_header_only() {
        assert_eq!(render_report(&InventoryStore::new()), "Items Report\n");
    }

    #[test]
    fn entries_render_in_insertion_order() {
        let mut store = InventoryStore::new();
        store.add("apple", 10);
        store.add("banana", -2);

        assert_eq!(
            render_report(&store),
            "Items Report\napple -> 10\nbanana -> -2\n"
        );
    }
}
