use comfy_table::{Cell, Table};

use crate::store::Store;

pub fn status(store: &Store) -> anyhow::Result<()> {
    let entries = store.list_statuses()?;

    if entries.is_empty() {
        println!("No action statuses recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Record", "Status", "Updated"]);

    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.record_id),
            Cell::new(&entry.label),
            Cell::new(&entry.updated_at),
        ]);
    }

    println!("{table}");
    Ok(())
}
