use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::store::models::RequestRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    Phone,
    Address,
    Description,
    Courier,
    Quantity,
    SubmittedAt,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" | "customer" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "address" => Some(Self::Address),
            "description" => Some(Self::Description),
            "courier" => Some(Self::Courier),
            "quantity" => Some(Self::Quantity),
            "time" | "submitted" => Some(Self::SubmittedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

enum SortValue<'a> {
    Str(&'a str),
    Num(u32),
    Time(DateTime<Utc>),
}

fn key_value<'a>(record: &'a RequestRecord, key: SortKey) -> Option<SortValue<'a>> {
    match key {
        SortKey::Name => record.customer_name.as_deref().map(SortValue::Str),
        SortKey::Email => record.user_email.as_deref().map(SortValue::Str),
        SortKey::Phone => record.phone_number.as_deref().map(SortValue::Str),
        SortKey::Address => record.address.as_deref().map(SortValue::Str),
        SortKey::Description => record.description.as_deref().map(SortValue::Str),
        SortKey::Courier => record.courier.as_deref().map(SortValue::Str),
        SortKey::Quantity => Some(SortValue::Num(record.quantity)),
        SortKey::SubmittedAt => record.submitted_at.map(SortValue::Time),
    }
}

fn compare(a: &RequestRecord, b: &RequestRecord, key: SortKey) -> Ordering {
    match (key_value(a, key), key_value(b, key)) {
        (Some(SortValue::Str(x)), Some(SortValue::Str(y))) => {
            // Case-insensitive ordering, raw bytes as the deterministic
            // tie-break between casings of the same word.
            x.to_lowercase().cmp(&y.to_lowercase()).then_with(|| x.cmp(y))
        }
        (Some(SortValue::Num(x)), Some(SortValue::Num(y))) => x.cmp(&y),
        (Some(SortValue::Time(x)), Some(SortValue::Time(y))) => x.cmp(&y),
        // A missing value on either side: no ordering guarantee beyond
        // stability, so the pair keeps its input order.
        _ => Ordering::Equal,
    }
}

/// Stable sort by the given key. Equal or incomparable pairs retain their
/// relative order from the input sequence.
pub fn sort_batch(batch: &mut [RequestRecord], key: SortKey, direction: SortDirection) {
    batch.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: Option<&str>, quantity: u32) -> RequestRecord {
        RequestRecord {
            id: id.into(),
            customer_name: name.map(String::from),
            quantity,
            ..Default::default()
        }
    }

    fn ids(batch: &[RequestRecord]) -> Vec<&str> {
        batch.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_numeric_sort_ascending() {
        let mut batch = vec![
            record("1", Some("Alice"), 5),
            record("2", Some("Bob"), 3),
            record("3", Some("Carol"), 2),
        ];
        sort_batch(&mut batch, SortKey::Quantity, SortDirection::Asc);
        assert_eq!(ids(&batch), ["3", "2", "1"]);
    }

    #[test]
    fn test_descending_is_exact_reverse_for_distinct_values() {
        let mut asc = vec![
            record("1", Some("Alice"), 5),
            record("2", Some("Bob"), 3),
            record("3", Some("Carol"), 2),
        ];
        let mut desc = asc.clone();
        sort_batch(&mut asc, SortKey::Quantity, SortDirection::Asc);
        sort_batch(&mut desc, SortKey::Quantity, SortDirection::Desc);
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_string_sort_is_case_insensitive() {
        let mut batch = vec![
            record("1", Some("carol"), 0),
            record("2", Some("Alice"), 0),
            record("3", Some("BOB"), 0),
        ];
        sort_batch(&mut batch, SortKey::Name, SortDirection::Asc);
        assert_eq!(ids(&batch), ["2", "3", "1"]);
    }

    #[test]
    fn test_stable_on_equal_keys() {
        let mut batch = vec![
            record("first", Some("Same"), 1),
            record("second", Some("Same"), 2),
            record("third", Some("Same"), 3),
        ];
        sort_batch(&mut batch, SortKey::Name, SortDirection::Asc);
        assert_eq!(ids(&batch), ["first", "second", "third"]);
        sort_batch(&mut batch, SortKey::Name, SortDirection::Desc);
        assert_eq!(ids(&batch), ["first", "second", "third"]);
    }

    #[test]
    fn test_missing_values_keep_input_order() {
        let mut batch = vec![
            record("1", None, 0),
            record("2", Some("Bob"), 0),
            record("3", None, 0),
        ];
        sort_batch(&mut batch, SortKey::Name, SortDirection::Asc);
        // "1" and "3" are incomparable on name; neither moves relative to
        // the other and nothing panics.
        let order = ids(&batch);
        let pos1 = order.iter().position(|id| *id == "1").unwrap();
        let pos3 = order.iter().position(|id| *id == "3").unwrap();
        assert!(pos1 < pos3);
    }

    #[test]
    fn test_timestamp_sort() {
        use chrono::TimeZone;
        let mut batch = vec![
            RequestRecord {
                id: "late".into(),
                submitted_at: Some(Utc.with_ymd_and_hms(2026, 5, 2, 12, 0, 0).unwrap()),
                ..Default::default()
            },
            RequestRecord {
                id: "early".into(),
                submitted_at: Some(Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()),
                ..Default::default()
            },
        ];
        sort_batch(&mut batch, SortKey::SubmittedAt, SortDirection::Asc);
        assert_eq!(ids(&batch), ["early", "late"]);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(SortKey::parse("Quantity"), Some(SortKey::Quantity));
        assert_eq!(SortKey::parse("time"), Some(SortKey::SubmittedAt));
        assert_eq!(SortKey::parse("bogus"), None);
    }
}
