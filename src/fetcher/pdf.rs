// file: src/fetcher/pdf.rs
// description: pdf text extraction with validation and panic isolation
// reference: https://docs.rs/pdf-extract

use crate::error::{PipelineError, Result};
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF";

pub fn validate_pdf(bytes: &[u8]) -> Result<()> {
    if bytes.len() < 8 {
        return Err(PipelineError::PdfProcessing(
            "document is too small to be a PDF".to_string(),
        ));
    }

    if !bytes.starts_with(PDF_MAGIC) {
        return Err(PipelineError::PdfProcessing(
            "missing %PDF header".to_string(),
        ));
    }

    Ok(())
}

/// Extracts the text layer of every page. Malformed documents can make the
/// PDF library panic, so panics are reported as processing errors.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    validate_pdf(bytes)?;

    let text = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
        .map_err(|_| PipelineError::PdfProcessing("PDF parser crashed".to_string()))?
        .map_err(|e| PipelineError::PdfProcessing(e.to_string()))?;

    debug!("Extracted {} chars of text from {} byte PDF", text.len(), bytes.len());
    Ok(text)
}
