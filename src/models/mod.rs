// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod accreditation;
pub mod certificate;

pub use accreditation::{AccreditationOutcome, AccreditationResult};
pub use certificate::{CertStatus, CertificateResult, Validity};
