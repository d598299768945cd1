use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::store::models::RequestRecord;

/// Bucket label for records with no courier set.
pub const UNSPECIFIED: &str = "Unspecified";

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub unique_emails: usize,
    pub total_quantity: u64,
    pub top_courier: CourierMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourierMode {
    pub label: String,
    pub count: usize,
}

/// Derive the summary widgets from the full unfiltered batch.
pub fn summarize(batch: &[RequestRecord]) -> Summary {
    let unique_emails = batch
        .iter()
        .filter_map(|r| r.user_email.as_deref())
        .collect::<HashSet<_>>()
        .len();

    let total_quantity = batch.iter().map(|r| u64::from(r.quantity)).sum();

    Summary {
        total: batch.len(),
        unique_emails,
        total_quantity,
        top_courier: courier_mode(batch),
    }
}

/// Most frequent courier label; ties go to the label seen first in the
/// batch. Absent/empty couriers count under the `Unspecified` bucket.
fn courier_mode(batch: &[RequestRecord]) -> CourierMode {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for record in batch {
        let label = record
            .courier
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNSPECIFIED);
        if !counts.contains_key(label) {
            first_seen.push(label);
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut top = CourierMode {
        label: UNSPECIFIED.to_string(),
        count: 0,
    };
    for label in first_seen {
        let count = counts[label];
        if count > top.count {
            top = CourierMode {
                label: label.to_string(),
                count,
            };
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, email: Option<&str>, quantity: u32, courier: Option<&str>) -> RequestRecord {
        RequestRecord {
            id: id.into(),
            user_email: email.map(String::from),
            quantity,
            courier: courier.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let batch = vec![
            record("1", Some("alice@x.com"), 5, Some("A")),
            record("2", Some("bob@x.com"), 3, Some("A")),
            record("3", Some("carol@x.com"), 2, Some("B")),
        ];
        let summary = summarize(&batch);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.total_quantity, 10);
        assert_eq!(summary.unique_emails, 3);
        assert_eq!(summary.top_courier.label, "A");
        assert_eq!(summary.top_courier.count, 2);
    }

    #[test]
    fn test_duplicate_emails_count_once() {
        let batch = vec![
            record("1", Some("same@x.com"), 0, None),
            record("2", Some("same@x.com"), 0, None),
            record("3", None, 0, None),
        ];
        let summary = summarize(&batch);
        assert_eq!(summary.unique_emails, 1);
    }

    #[test]
    fn test_missing_quantity_counts_as_zero() {
        let batch = vec![
            record("1", None, 0, None),
            record("2", None, 7, None),
        ];
        assert_eq!(summarize(&batch).total_quantity, 7);
    }

    #[test]
    fn test_all_unspecified_couriers() {
        let batch = vec![
            record("1", None, 0, None),
            record("2", None, 0, Some("")),
            record("3", None, 0, Some("  ")),
        ];
        let mode = summarize(&batch).top_courier;
        assert_eq!(mode.label, UNSPECIFIED);
        assert_eq!(mode.count, 3);
    }

    #[test]
    fn test_empty_batch() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.unique_emails, 0);
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.top_courier.label, UNSPECIFIED);
        assert_eq!(summary.top_courier.count, 0);
    }

    #[test]
    fn test_tie_breaks_to_first_seen() {
        let batch = vec![
            record("1", None, 0, Some("B")),
            record("2", None, 0, Some("A")),
            record("3", None, 0, Some("A")),
            record("4", None, 0, Some("B")),
        ];
        // B and A both appear twice; B was seen first.
        assert_eq!(summarize(&batch).top_courier.label, "B");
    }
}
