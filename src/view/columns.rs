use chrono::Local;

use super::DisplayMode;
use crate::store::models::RequestRecord;

pub const PLACEHOLDER: &str = "N/A";
pub const NO_LINKS: &str = "No Links";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub label: String,
    pub url: String,
}

/// Per-row synthesized actions: an outbound messaging deep link (absent
/// without a phone number) and the invoice trigger for this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActions {
    pub message: Option<ActionLink>,
    pub invoice_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Missing,
    Text(String),
    Links(Vec<ActionLink>),
    Actions(RowActions),
}

impl Cell {
    /// Flat text rendering, used by the terminal target.
    pub fn display(&self) -> String {
        match self {
            Cell::Missing => PLACEHOLDER.to_string(),
            Cell::Text(value) => value.clone(),
            Cell::Links(links) if links.is_empty() => NO_LINKS.to_string(),
            Cell::Links(links) => links
                .iter()
                .map(|l| format!("{}: {}", l.label, l.url))
                .collect::<Vec<_>>()
                .join("\n"),
            Cell::Actions(actions) => {
                let mut lines = Vec::new();
                if let Some(msg) = &actions.message {
                    lines.push(msg.url.clone());
                }
                lines.push(format!("invoice {}", actions.invoice_id));
                lines.join("\n")
            }
        }
    }
}

const MINIMAL_COLUMNS: &[&str] = &["Name", "Email", "Phone", "Quantity", "Actions", "Time"];
const FULL_COLUMNS: &[&str] = &[
    "Name",
    "Email",
    "Phone",
    "Quantity",
    "Address",
    "Description",
    "Courier",
    "Product Links",
    "Actions",
    "Time",
];

pub fn column_labels(mode: DisplayMode) -> &'static [&'static str] {
    match mode {
        DisplayMode::Minimal => MINIMAL_COLUMNS,
        DisplayMode::Full => FULL_COLUMNS,
    }
}

/// Map a record to its display cells, in `column_labels` order.
pub fn project(record: &RequestRecord, mode: DisplayMode) -> Vec<(&'static str, Cell)> {
    let actions = Cell::Actions(RowActions {
        message: message_link(record),
        invoice_id: record.id.clone(),
    });

    match mode {
        DisplayMode::Minimal => vec![
            ("Name", text_cell(&record.customer_name)),
            ("Email", text_cell(&record.user_email)),
            ("Phone", text_cell(&record.phone_number)),
            ("Quantity", Cell::Text(record.quantity.to_string())),
            ("Actions", actions),
            ("Time", timestamp_cell(record)),
        ],
        DisplayMode::Full => vec![
            ("Name", text_cell(&record.customer_name)),
            ("Email", text_cell(&record.user_email)),
            ("Phone", text_cell(&record.phone_number)),
            ("Quantity", Cell::Text(record.quantity.to_string())),
            ("Address", text_cell(&record.address)),
            ("Description", text_cell(&record.description)),
            ("Courier", text_cell(&record.courier)),
            ("Product Links", links_cell(record)),
            ("Actions", actions),
            ("Time", timestamp_cell(record)),
        ],
    }
}

fn text_cell(field: &Option<String>) -> Cell {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Cell::Text(value.to_string()),
        _ => Cell::Missing,
    }
}

fn timestamp_cell(record: &RequestRecord) -> Cell {
    match record.submitted_at {
        Some(ts) => Cell::Text(
            ts.with_timezone(&Local)
                .format("%b %-d, %Y %-I:%M %p")
                .to_string(),
        ),
        None => Cell::Missing,
    }
}

fn links_cell(record: &RequestRecord) -> Cell {
    Cell::Links(
        record
            .product_links
            .iter()
            .enumerate()
            .map(|(i, url)| ActionLink {
                label: format!("Link-{}", i + 1),
                url: url.clone(),
            })
            .collect(),
    )
}

/// WhatsApp deep link with a templated greeting. Needs nothing from the
/// record beyond name and phone.
pub fn message_link(record: &RequestRecord) -> Option<ActionLink> {
    let phone = record.phone_number.as_deref().filter(|p| !p.is_empty())?;
    let name = record.customer_name.as_deref().unwrap_or("there");
    let greeting = format!("Hello {name}, thanks for your request! How can we help?");
    Some(ActionLink {
        label: phone.to_string(),
        url: format!("https://wa.me/{phone}?text={}", urlencoding::encode(&greeting)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn full_record() -> RequestRecord {
        RequestRecord {
            id: "req-9".into(),
            customer_name: Some("Alice".into()),
            user_email: Some("alice@example.com".into()),
            phone_number: Some("8801712345678".into()),
            address: Some("12 Lake Rd".into()),
            description: Some("Gift wrap".into()),
            courier: Some("steadfast".into()),
            quantity: 2,
            submitted_at: Some(Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()),
            product_links: vec![
                "https://shop.example/a".into(),
                "https://shop.example/b".into(),
            ],
        }
    }

    #[test]
    fn test_minimal_and_full_column_sets() {
        let rec = full_record();
        let minimal = project(&rec, DisplayMode::Minimal);
        let full = project(&rec, DisplayMode::Full);
        assert_eq!(minimal.len(), MINIMAL_COLUMNS.len());
        assert_eq!(full.len(), FULL_COLUMNS.len());
        for (i, (label, _)) in full.iter().enumerate() {
            assert_eq!(*label, FULL_COLUMNS[i]);
        }
    }

    #[test]
    fn test_missing_fields_become_placeholders() {
        let rec = RequestRecord {
            id: "bare".into(),
            ..Default::default()
        };
        let cells = project(&rec, DisplayMode::Full);
        let by_label: std::collections::HashMap<_, _> = cells.into_iter().collect();
        assert_eq!(by_label["Name"].display(), PLACEHOLDER);
        assert_eq!(by_label["Time"].display(), PLACEHOLDER);
        assert_eq!(by_label["Product Links"].display(), NO_LINKS);
        assert_eq!(by_label["Quantity"].display(), "0");
    }

    #[test]
    fn test_product_links_are_numbered() {
        let cells = project(&full_record(), DisplayMode::Full);
        let links = cells
            .iter()
            .find(|(label, _)| *label == "Product Links")
            .map(|(_, c)| c)
            .unwrap();
        match links {
            Cell::Links(links) => {
                assert_eq!(links.len(), 2);
                assert_eq!(links[0].label, "Link-1");
                assert_eq!(links[1].label, "Link-2");
                assert_eq!(links[1].url, "https://shop.example/b");
            }
            other => panic!("expected links cell, got {other:?}"),
        }
    }

    #[test]
    fn test_message_link_encodes_greeting() {
        let link = message_link(&full_record()).unwrap();
        assert!(link.url.starts_with("https://wa.me/8801712345678?text="));
        assert!(link.url.contains("Hello%20Alice"));
        assert!(!link.url.contains(' '));
    }

    #[test]
    fn test_message_link_absent_without_phone() {
        let rec = RequestRecord {
            id: "x".into(),
            customer_name: Some("Alice".into()),
            ..Default::default()
        };
        assert!(message_link(&rec).is_none());
    }

    #[test]
    fn test_actions_carry_invoice_trigger() {
        let cells = project(&full_record(), DisplayMode::Minimal);
        let actions = cells
            .iter()
            .find(|(label, _)| *label == "Actions")
            .map(|(_, c)| c)
            .unwrap();
        match actions {
            Cell::Actions(a) => {
                assert_eq!(a.invoice_id, "req-9");
                assert!(a.message.is_some());
            }
            other => panic!("expected actions cell, got {other:?}"),
        }
    }
}
