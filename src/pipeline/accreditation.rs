// file: src/pipeline/accreditation.rs
// description: exporter accreditation lookup over the rendered registry table
// reference: cerberus exporter registry

use crate::browser::TableSource;
use crate::models::accreditation::{ENTITY_NOT_FOUND, TABLE_PARSE_FAILED};
use crate::models::{AccreditationOutcome, AccreditationResult};
use tracing::{info, warn};

pub struct AccreditationLookup<T> {
    source: T,
}

impl<T: TableSource> AccreditationLookup<T> {
    pub fn new(source: T) -> Self {
        Self { source }
    }

    /// Every failure, including the browser's own, comes back as an error
    /// outcome rather than an `Err`.
    pub async fn lookup(&self, inn: &str) -> AccreditationOutcome {
        let cells = match self.source.first_row(inn).await {
            Ok(Some(cells)) => cells,
            Ok(None) => {
                info!("No registry entry for INN {}", inn);
                return AccreditationOutcome::failed(ENTITY_NOT_FOUND);
            }
            Err(e) => {
                warn!("Registry lookup for INN {} failed: {}", inn, e);
                return AccreditationOutcome::failed(e.to_string());
            }
        };

        match AccreditationResult::from_row(inn, &cells) {
            Some(result) => {
                info!(
                    "INN {} accreditation: {} ({})",
                    inn, result.status, result.china_status
                );
                AccreditationOutcome::Found(result)
            }
            None => {
                warn!("Registry row for INN {} has only {} column(s)", inn, cells.len());
                AccreditationOutcome::failed(TABLE_PARSE_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PipelineError, Result};

    struct FixedRow(Option<Vec<&'static str>>);

    impl TableSource for FixedRow {
        async fn first_row(&self, _inn: &str) -> Result<Option<Vec<String>>> {
            Ok(self
                .0
                .as_ref()
                .map(|cells| cells.iter().map(|c| c.to_string()).collect()))
        }
    }

    struct TimedOut;

    impl TableSource for TimedOut {
        async fn first_row(&self, _inn: &str) -> Result<Option<Vec<String>>> {
            Err(PipelineError::Browser(
                "The event waited for never came".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_found() {
        let lookup = AccreditationLookup::new(FixedRow(Some(vec![
            "1",
            "ООО Агро",
            "2310031475",
            "Краснодар",
            "Китай",
            "Аттестовано",
        ])));

        match lookup.lookup("2310031475").await {
            AccreditationOutcome::Found(result) => {
                assert_eq!(result.inn, "2310031475");
                assert_eq!(result.destination, "Китай");
                assert!(result.china_accredited);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_rows() {
        let outcome = AccreditationLookup::new(FixedRow(None)).lookup("1").await;
        assert_eq!(outcome, AccreditationOutcome::failed(ENTITY_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_five_columns_is_a_parse_failure() {
        let lookup = AccreditationLookup::new(FixedRow(Some(vec!["1", "2", "3", "4", "Китай"])));
        assert_eq!(
            lookup.lookup("1").await,
            AccreditationOutcome::failed(TABLE_PARSE_FAILED)
        );
    }

    #[test]
    fn test_browser_error_is_surfaced() {
        let outcome = tokio_test::block_on(AccreditationLookup::new(TimedOut).lookup("1"));
        assert_eq!(
            outcome,
            AccreditationOutcome::failed("The event waited for never came")
        );
    }
}
