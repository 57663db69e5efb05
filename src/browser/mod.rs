// file: src/browser/mod.rs
// description: browser-rendered registry table retrieval module exports
// reference: internal module structure

pub mod chrome;
pub mod table;

pub use chrome::ChromeTableScraper;
pub use table::first_row_cells;

use crate::error::Result;
use std::future::Future;

/// Source of the exporter registry's result table.
///
/// Resolves to `Ok(None)` when the table rendered without data rows and to
/// `PipelineError::Browser` when the page or table never appeared.
pub trait TableSource {
    fn first_row(&self, inn: &str) -> impl Future<Output = Result<Option<Vec<String>>>> + Send;
}
