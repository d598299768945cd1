use crate::render::RenderFormat;
use crate::store::Store;
use crate::view::{TableView, ViewConfig};

pub fn view(
    store: &Store,
    config: &ViewConfig,
    format: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let batch = store.list_requests()?;
    if batch.is_empty() {
        println!("No records in the local cache. Run `request-desk sync` first.");
        return Ok(());
    }

    let table = TableView::build(&batch, config);

    let fmt = match format {
        "json" => RenderFormat::Json,
        "html" => RenderFormat::Html,
        _ => RenderFormat::Terminal,
    };
    let rendered = table.render(fmt)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("View written to {path}");
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
