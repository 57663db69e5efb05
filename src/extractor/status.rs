// file: src/extractor/status.rs
// description: certificate status classification from status vocabulary

use crate::extractor::patterns::{STATUS_ACTIVE, STATUS_REDEEMED};
use crate::models::CertStatus;

/// Redeemed vocabulary takes priority: a document mentioning both is redeemed.
pub fn extract_certificate_status(text: &str) -> Option<CertStatus> {
    if STATUS_REDEEMED.is_match(text) {
        return Some(CertStatus::Redeemed);
    }
    if STATUS_ACTIVE.is_match(text) {
        return Some(CertStatus::Active);
    }
    None
}
