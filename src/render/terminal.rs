use comfy_table::{Cell, Table};

use crate::view::TableView;

pub fn render(view: &TableView) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "=== Customer Requests ({}) ===\n\n",
        view.generated_at
    ));

    output.push_str("--- Summary ---\n");
    output.push_str(&format!("Total requests:    {}\n", view.summary.total));
    output.push_str(&format!(
        "Unique customers:  {}\n",
        view.summary.unique_emails
    ));
    output.push_str(&format!(
        "Total quantity:    {}\n",
        view.summary.total_quantity
    ));
    output.push_str(&format!(
        "Top courier:       {} ({})\n",
        view.summary.top_courier.label, view.summary.top_courier.count
    ));

    if view.rows.is_empty() {
        output.push_str("\nNo matching requests.\n");
        return Ok(output);
    }

    output.push('\n');
    let mut table = Table::new();
    table.set_header(view.columns.iter().map(|c| Cell::new(c)));
    for row in &view.rows {
        table.add_row(row.iter().map(|cell| Cell::new(cell.display())));
    }
    output.push_str(&table.to_string());
    output.push('\n');

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::RequestRecord;
    use crate::view::{TableView, ViewConfig};

    #[test]
    fn test_render_contains_summary_and_rows() {
        let batch = vec![RequestRecord {
            id: "1".into(),
            customer_name: Some("Alice".into()),
            quantity: 5,
            ..Default::default()
        }];
        let view = TableView::build(&batch, &ViewConfig::default());
        let out = render(&view).unwrap();
        assert!(out.contains("Total requests:    1"));
        assert!(out.contains("Alice"));
    }

    #[test]
    fn test_render_empty_batch() {
        let view = TableView::build(&[], &ViewConfig::default());
        let out = render(&view).unwrap();
        assert!(out.contains("No matching requests."));
    }
}
