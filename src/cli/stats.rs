use crate::store::Store;
use crate::view::stats;

pub fn stats(store: &Store) -> anyhow::Result<()> {
    let batch = store.list_requests()?;
    let summary = stats::summarize(&batch);

    println!("Total requests:    {}", summary.total);
    println!("Unique customers:  {}", summary.unique_emails);
    println!("Total quantity:    {}", summary.total_quantity);
    println!(
        "Top courier:       {} ({} request(s))",
        summary.top_courier.label, summary.top_courier.count
    );

    if let Some(ts) = store.get_sync_meta("last_synced_at")? {
        println!("Last synced:       {ts}");
    } else {
        println!("Last synced:       never (run `request-desk sync`)");
    }
    Ok(())
}
