// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod accreditation;
mod analyzer;
mod extraction;
mod progress;

pub use accreditation::AccreditationLookup;
pub use analyzer::CertificateAnalyzer;
pub use extraction::CertificateExtractor;
pub use progress::{BatchStats, ProgressTracker};
