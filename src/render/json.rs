use serde_json::{Value, json};

use crate::view::TableView;
use crate::view::columns::{Cell, NO_LINKS, PLACEHOLDER};

pub fn render(view: &TableView) -> anyhow::Result<String> {
    let rows: Vec<Value> = view
        .rows
        .iter()
        .map(|row| {
            view.columns
                .iter()
                .zip(row)
                .map(|(label, cell)| (label.to_string(), cell_value(cell)))
                .collect::<serde_json::Map<_, _>>()
                .into()
        })
        .collect();

    let doc = json!({
        "generated_at": view.generated_at,
        "summary": view.summary,
        "columns": view.columns,
        "rows": rows,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Missing => Value::String(PLACEHOLDER.into()),
        Cell::Text(value) => Value::String(value.clone()),
        Cell::Links(links) if links.is_empty() => Value::String(NO_LINKS.into()),
        Cell::Links(links) => links
            .iter()
            .map(|l| json!({ "label": l.label, "url": l.url }))
            .collect(),
        Cell::Actions(actions) => json!({
            "message": actions.message.as_ref().map(|m| m.url.clone()),
            "invoice": actions.invoice_id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::RequestRecord;
    use crate::view::{DisplayMode, TableView, ViewConfig};

    #[test]
    fn test_rows_are_label_keyed_objects() {
        let batch = vec![RequestRecord {
            id: "1".into(),
            customer_name: Some("Alice".into()),
            product_links: vec!["https://shop.example/a".into()],
            ..Default::default()
        }];
        let config = ViewConfig {
            mode: DisplayMode::Full,
            ..Default::default()
        };
        let view = TableView::build(&batch, &config);
        let out = render(&view).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["summary"]["total"], 1);
        let row = &parsed["rows"][0];
        assert_eq!(row["Name"], "Alice");
        assert_eq!(row["Email"], PLACEHOLDER);
        assert_eq!(row["Product Links"][0]["label"], "Link-1");
        assert_eq!(row["Actions"]["invoice"], "1");
    }
}
