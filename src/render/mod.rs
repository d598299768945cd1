pub mod html;
pub mod json;
pub mod terminal;

use crate::view::TableView;

pub enum RenderFormat {
    Terminal,
    Json,
    Html,
}

impl TableView {
    pub fn render(&self, format: RenderFormat) -> anyhow::Result<String> {
        match format {
            RenderFormat::Terminal => terminal::render(self),
            RenderFormat::Json => json::render(self),
            RenderFormat::Html => html::render(self),
        }
    }
}
