//! Command-line entry point: exercises the inventory store end to end
//! (adds, removals, queries, save/load, report).

mod report;

use anyhow::Result;
use stocktally_core::StoreError;
use stocktally_inventory::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
use tracing::info;

fn main() -> Result<()> {
    stocktally_observability::init();

    let mut store = InventoryStore::new();

    if let Some(entry) = store.add("apple", 10) {
        info!(%entry, "stock added");
    }
    // Negative adds are allowed; only removals delete entries.
    if let Some(entry) = store.add("banana", -2) {
        info!(%entry, "stock added");
    }
    // Rejected with a warning, harmless.
    store.add("   ", 0);

    store.remove("apple", 3);
    store.remove("orange", 1);

    match store.get("apple") {
        Ok(qty) => println!("Apple stock: {qty}"),
        Err(StoreError::NotFound(_)) => println!("Apple not in stock"),
        Err(err) => return Err(err.into()),
    }

    let low = store.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)?;
    println!("Low items: {low:?}");

    store.save(DEFAULT_INVENTORY_PATH)?;
    store.load(DEFAULT_INVENTORY_PATH)?;

    print!("{}", report::render_report(&store));
    Ok(())
}
