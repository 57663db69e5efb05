// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use browser::{ChromeTableScraper, TableSource};
pub use config::{AccreditationConfig, Config, ExtractionConfig, PortalConfig, ServerConfig};
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use extractor::{CompanyNameExtractor, ProductNameExtractor};
pub use fetcher::{CertificateSource, PortalClient};
pub use models::{AccreditationOutcome, AccreditationResult, CertStatus, CertificateResult, Validity};
pub use pipeline::{
    AccreditationLookup, BatchStats, CertificateAnalyzer, CertificateExtractor, ProgressTracker,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _client = PortalClient::new(config.portal.clone()).unwrap();
        let _scraper = ChromeTableScraper::new(config.accreditation);
    }
}
