// file: src/fetcher/mod.rs
// description: certificate document retrieval module exports
// reference: internal module structure

pub mod pdf;
pub mod portal;

pub use portal::PortalClient;

use crate::error::Result;
use std::future::Future;

/// Anything that can turn a certificate number into the document's plain text.
///
/// Implementations report transport problems as `PipelineError::Network` and
/// undecodable documents as `PipelineError::PdfProcessing`.
pub trait CertificateSource {
    fn fetch_text(&self, number: &str) -> impl Future<Output = Result<String>> + Send;
}
