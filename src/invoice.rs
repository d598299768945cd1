use crate::render::html::{escape_html, write_stat};
use crate::store::models::RequestRecord;
use crate::view::columns::PLACEHOLDER;

/// Structured description of a printable invoice. Building it is pure
/// string templating; how it gets rendered (popup, file, PDF) is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct InvoiceDoc {
    pub invoice_no: String,
    pub generated_at: String,
    pub fields: Vec<(String, String)>,
    pub lines: Vec<String>,
    /// Compact customer summary meant to be QR-encoded on the printout.
    pub qr_payload: String,
}

pub fn build_invoice(record: &RequestRecord) -> InvoiceDoc {
    let name = record.customer_name.as_deref().unwrap_or(PLACEHOLDER);
    let email = record.user_email.as_deref().unwrap_or(PLACEHOLDER);
    let phone = record.phone_number.as_deref().unwrap_or(PLACEHOLDER);

    let fields = vec![
        ("Customer".to_string(), name.to_string()),
        ("Email".to_string(), email.to_string()),
        ("Phone".to_string(), phone.to_string()),
        (
            "Address".to_string(),
            record
                .address
                .as_deref()
                .unwrap_or(PLACEHOLDER)
                .to_string(),
        ),
        ("Quantity".to_string(), record.quantity.to_string()),
    ];

    let lines = record
        .product_links
        .iter()
        .enumerate()
        .map(|(i, url)| format!("Item {} — {url}", i + 1))
        .collect();

    InvoiceDoc {
        invoice_no: format!("INV-{}", record.id),
        generated_at: chrono::Utc::now().to_rfc3339(),
        fields,
        lines,
        qr_payload: format!("Name: {name}\nEmail: {email}\nPhone: {phone}"),
    }
}

/// Standalone printable page for the invoice.
pub fn render_html(doc: &InvoiceDoc) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "<title>Invoice {}</title>\n",
        escape_html(&doc.invoice_no)
    ));
    html.push_str("<style>\n");
    html.push_str("  body { font-family: system-ui, sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; color: #1a1a1a; }\n");
    html.push_str("  h1 { border-bottom: 2px solid #333; padding-bottom: 0.5rem; }\n");
    html.push_str("  dt { font-weight: 600; margin-top: 0.5rem; }\n");
    html.push_str("  ol { margin: 1rem 0; }\n");
    html.push_str("  .stat { background: #f5f5f5; padding: 1rem; border-radius: 4px; margin-top: 1rem; }\n");
    html.push_str("  .stat .value { font-size: 1.5rem; font-weight: 700; }\n");
    html.push_str("  .stat .label { color: #666; font-size: 0.875rem; }\n");
    html.push_str("  pre.qr { background: #f5f5f5; padding: 1rem; font-size: 0.8rem; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!("<h1>Invoice {}</h1>\n", escape_html(&doc.invoice_no)));
    html.push_str(&format!(
        "<p>Generated: {}</p>\n",
        escape_html(&doc.generated_at)
    ));

    html.push_str("<dl>\n");
    for (label, value) in &doc.fields {
        html.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape_html(label),
            escape_html(value)
        ));
    }
    html.push_str("</dl>\n");

    if !doc.lines.is_empty() {
        html.push_str("<h2>Items</h2>\n<ol>\n");
        for line in &doc.lines {
            html.push_str(&format!("<li>{}</li>\n", escape_html(line)));
        }
        html.push_str("</ol>\n");
    }

    write_stat(&mut html, "Items", &doc.lines.len().to_string());

    // The QR payload is printed verbatim; the print surface encodes it.
    html.push_str(&format!(
        "<pre class=\"qr\">{}</pre>\n",
        escape_html(&doc.qr_payload)
    ));

    html.push_str("</body>\n</html>\n");
    html
}
