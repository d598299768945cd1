use crate::error::AppError;
use crate::invoice::{build_invoice, render_html};
use crate::source::{RecordSource, push_status_quietly};
use crate::store::Store;

pub async fn invoice(
    store: &Store,
    source: &RecordSource,
    id: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let record = store
        .get_request(id)?
        .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

    let doc = build_invoice(&record);
    let html = render_html(&doc);

    match output {
        Some(path) => {
            std::fs::write(path, &html)?;
            println!("Invoice {} written to {path}", doc.invoice_no);
        }
        None => {
            println!("{html}");
        }
    }

    store.set_status(id, "Invoiced")?;
    push_status_quietly(source, id, "Invoiced").await;
    Ok(())
}
