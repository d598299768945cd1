use crate::store::models::RequestRecord;

/// Keep the records where the lowercased query is a substring of at least
/// one searchable field. An empty query matches everything; absent fields
/// never match and never fail.
pub fn filter_batch(batch: Vec<RequestRecord>, query: &str) -> Vec<RequestRecord> {
    if query.is_empty() {
        return batch;
    }
    let needle = query.to_lowercase();
    batch
        .into_iter()
        .filter(|record| matches_query(record, &needle))
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_query(record: &RequestRecord, needle: &str) -> bool {
    let fields = [
        &record.customer_name,
        &record.user_email,
        &record.address,
        &record.phone_number,
        &record.courier,
    ];
    fields
        .iter()
        .any(|f| f.as_deref().is_some_and(|v| v.to_lowercase().contains(needle)))
        || record
            .product_links
            .iter()
            .any(|link| link.to_lowercase().contains(needle))
}
