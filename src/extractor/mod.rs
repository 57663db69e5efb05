// file: src/extractor/mod.rs
// description: certificate field extraction module exports and strategy chaining
// reference: internal module structure

pub mod company;
pub mod date;
pub mod inn;
pub mod keywords;
pub mod patterns;
pub mod product;
pub mod status;
pub mod text;

pub use company::CompanyNameExtractor;
pub use date::{classify_validity, extract_issue_date};
pub use inn::extract_inn;
pub use keywords::search_keywords;
pub use product::ProductNameExtractor;
pub use status::extract_certificate_status;
pub use text::normalize_lines;

use tracing::debug;

/// A single heuristic for locating a field; `None` hands over to the next one.
pub type Strategy = fn(&str) -> Option<String>;

/// Runs strategies in priority order and stops at the first hit.
pub fn first_success(text: &str, strategies: &[(&'static str, Strategy)]) -> Option<String> {
    strategies.iter().find_map(|(name, strategy)| {
        let found = strategy(text);
        if found.is_some() {
            debug!("Field located by {} strategy", name);
        }
        found
    })
}
