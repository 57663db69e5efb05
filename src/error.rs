// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ошибка сети: {0}")]
    Network(String),

    #[error("Ошибка обработки PDF: {0}")]
    PdfProcessing(String),

    #[error("{0}")]
    Browser(String),

    #[error("Ошибка проверки данных: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    /// Network failures are worth another attempt; a broken document is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PipelineError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = PipelineError::Network("timed out".to_string());
        assert_eq!(err.to_string(), "Ошибка сети: timed out");

        let err = PipelineError::PdfProcessing("bad xref".to_string());
        assert_eq!(err.to_string(), "Ошибка обработки PDF: bad xref");

        let err = PipelineError::Validation("пустой номер".to_string());
        assert_eq!(err.to_string(), "Ошибка проверки данных: пустой номер");
    }

    #[test]
    fn test_only_network_errors_retry() {
        assert!(PipelineError::Network("reset".into()).is_retryable());
        assert!(!PipelineError::PdfProcessing("eof".into()).is_retryable());
        assert!(!PipelineError::Browser("closed".into()).is_retryable());
    }
}
