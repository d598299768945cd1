use crate::view::TableView;
use crate::view::columns::{Cell, NO_LINKS, PLACEHOLDER};

pub fn render(view: &TableView) -> anyhow::Result<String> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>Customer Requests</title>\n");
    html.push_str("<style>\n");
    html.push_str("  body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 2rem auto; padding: 0 1rem; color: #1a1a1a; }\n");
    html.push_str("  h1 { border-bottom: 2px solid #333; padding-bottom: 0.5rem; }\n");
    html.push_str("  table { border-collapse: collapse; width: 100%; margin: 1rem 0; }\n");
    html.push_str("  th, td { border: 1px solid #ddd; padding: 0.5rem; text-align: left; }\n");
    html.push_str("  th { background: #f5f5f5; font-weight: 600; }\n");
    html.push_str("  tr:nth-child(even) { background: #fafafa; }\n");
    html.push_str("  .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; margin: 1rem 0; }\n");
    html.push_str("  .stat { background: #f5f5f5; padding: 1rem; border-radius: 4px; }\n");
    html.push_str("  .stat .value { font-size: 1.5rem; font-weight: 700; }\n");
    html.push_str("  .stat .label { color: #666; font-size: 0.875rem; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<h1>Customer Requests</h1>\n<p>Generated: {}</p>\n",
        escape_html(&view.generated_at)
    ));

    html.push_str("<div class=\"summary\">\n");
    write_stat(&mut html, "Total Requests", &view.summary.total.to_string());
    write_stat(
        &mut html,
        "Unique Customers",
        &view.summary.unique_emails.to_string(),
    );
    write_stat(
        &mut html,
        "Total Quantity",
        &view.summary.total_quantity.to_string(),
    );
    write_stat(
        &mut html,
        "Top Courier",
        &format!(
            "{} ({})",
            view.summary.top_courier.label, view.summary.top_courier.count
        ),
    );
    html.push_str("</div>\n");

    html.push_str("<table>\n<thead><tr>");
    for label in view.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(label)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &view.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", cell_html(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Missing => PLACEHOLDER.to_string(),
        Cell::Text(value) => escape_html(value),
        Cell::Links(links) if links.is_empty() => NO_LINKS.to_string(),
        Cell::Links(links) => links
            .iter()
            .map(|l| {
                format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape_html(&l.url),
                    escape_html(&l.label)
                )
            })
            .collect::<Vec<_>>()
            .join("<br>"),
        Cell::Actions(actions) => {
            let mut parts = Vec::new();
            if let Some(msg) = &actions.message {
                parts.push(format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">WhatsApp</a>",
                    escape_html(&msg.url)
                ));
            }
            parts.push(format!(
                "<a href=\"invoices/{}.html\">Invoice</a>",
                escape_html(&actions.invoice_id)
            ));
            parts.join(" | ")
        }
    }
}

pub(crate) fn write_stat(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<div class=\"stat\"><div class=\"value\">{}</div><div class=\"label\">{}</div></div>\n",
        escape_html(value),
        escape_html(label)
    ));
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
