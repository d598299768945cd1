use crate::source::RecordSource;
use crate::store::Store;

pub async fn sync(store: &Store, source: &RecordSource) -> anyhow::Result<()> {
    println!("Fetching request records...");
    let records = source.fetch_requests().await?;
    let count = records.len();

    for record in &records {
        store.upsert_request(record)?;
    }

    let now = chrono::Utc::now().to_rfc3339();
    store.set_sync_meta("last_synced_at", &now)?;

    println!("Sync complete: {count} record(s).");
    Ok(())
}
