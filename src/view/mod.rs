pub mod columns;
pub mod filter;
pub mod sort;
pub mod stats;

use crate::store::models::RequestRecord;
use columns::{Cell, column_labels, project};
use sort::{SortDirection, SortKey};
use stats::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Minimal,
    Full,
}

/// The single knob set every page variant of this dashboard boils down to.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub mode: DisplayMode,
    pub sort_key: Option<SortKey>,
    pub sort_direction: SortDirection,
    pub query: String,
}

impl ViewConfig {
    /// Selecting the active key flips the direction; selecting a new key
    /// resets to ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Asc;
        }
    }
}

/// A fully materialized view: filtered, sorted, projected rows plus the
/// summary widgets (which always cover the unfiltered batch).
pub struct TableView {
    pub generated_at: String,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
    pub summary: Summary,
}

impl TableView {
    pub fn build(batch: &[RequestRecord], config: &ViewConfig) -> Self {
        let summary = stats::summarize(batch);

        let mut visible = filter::filter_batch(batch.to_vec(), &config.query);
        if let Some(key) = config.sort_key {
            sort::sort_batch(&mut visible, key, config.sort_direction);
        }

        let rows = visible
            .iter()
            .map(|record| {
                project(record, config.mode)
                    .into_iter()
                    .map(|(_, cell)| cell)
                    .collect()
            })
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            columns: column_labels(config.mode),
            rows,
            summary,
        }
    }
}
