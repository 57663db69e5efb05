// file: src/pipeline/analyzer.rs
// description: per-certificate orchestration of fetching and field extraction
// reference: sequential batch processing with per-item failure isolation

use crate::config::ExtractionConfig;
use crate::fetcher::CertificateSource;
use crate::models::CertificateResult;
use crate::pipeline::CertificateExtractor;
use tracing::{info, warn};

pub struct CertificateAnalyzer<S> {
    source: S,
    extractor: CertificateExtractor,
}

impl<S: CertificateSource> CertificateAnalyzer<S> {
    pub fn new(source: S, config: &ExtractionConfig) -> Self {
        Self::with_extractor(source, CertificateExtractor::new(config))
    }

    pub fn with_extractor(source: S, extractor: CertificateExtractor) -> Self {
        Self { source, extractor }
    }

    /// Fetches one certificate and extracts its fields. A fetch failure is
    /// returned as the record's `error` and no extraction is attempted.
    pub async fn analyze(&self, number: &str, keywords: &[String]) -> CertificateResult {
        match self.source.fetch_text(number).await {
            Ok(text) => self.extractor.extract(number, &text, keywords),
            Err(e) => {
                warn!("Certificate {} could not be fetched: {}", number, e);
                CertificateResult::new(number).with_error(e.to_string())
            }
        }
    }

    /// Processes numbers strictly in order. Blank numbers are skipped and a
    /// failed certificate never stops the rest of the batch.
    pub async fn analyze_batch(&self, numbers: &[String], keywords: &[String]) -> Vec<CertificateResult> {
        self.analyze_batch_with(numbers, keywords, |_| {}).await
    }

    pub async fn analyze_batch_with<F>(
        &self,
        numbers: &[String],
        keywords: &[String],
        mut on_result: F,
    ) -> Vec<CertificateResult>
    where
        F: FnMut(&CertificateResult),
    {
        let mut results = Vec::with_capacity(numbers.len());

        for number in numbers {
            let number = number.trim();
            if number.is_empty() {
                continue;
            }
            let result = self.analyze(number, keywords).await;
            on_result(&result);
            results.push(result);
        }

        info!("Checked {} certificate(s)", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::{PipelineError, Result};
    use crate::extractor::{CompanyNameExtractor, ProductNameExtractor, Strategy};
    use pretty_assertions::assert_eq;

    struct StaticSource(&'static str);

    impl CertificateSource for StaticSource {
        async fn fetch_text(&self, _number: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenSource;

    impl CertificateSource for BrokenSource {
        async fn fetch_text(&self, _number: &str) -> Result<String> {
            Err(PipelineError::PdfProcessing("missing %PDF header".to_string()))
        }
    }

    const CERTIFICATE: &str = "Отправитель: ООО «Агро», Россия\n\
        Наименование продукции: Горох продовольственный\n\
        Дата выдачи: 10.06.2024\n";

    fn analyzer<S: CertificateSource>(source: S) -> CertificateAnalyzer<S> {
        CertificateAnalyzer::new(source, &Config::default_config().extraction)
    }

    #[tokio::test]
    async fn test_fetched_text_is_extracted() {
        let result = analyzer(StaticSource(CERTIFICATE)).analyze("5", &[]).await;

        assert_eq!(result.number, "5");
        assert_eq!(result.company_name.as_deref(), Some("ООО «Агро»"));
        assert_eq!(result.product_name.as_deref(), Some("Горох продовольственный"));
        assert_eq!(result.date_raw, "10.06.2024");
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_fetch_failure_short_circuits() {
        let result = analyzer(BrokenSource).analyze("7", &["Эгилопс".to_string()]).await;

        assert_eq!(
            result.error.as_deref(),
            Some("Ошибка обработки PDF: missing %PDF header")
        );
        assert_eq!(result.date_raw, "-");
        assert!(!result.found);
    }

    #[tokio::test]
    async fn test_batch_skips_blank_numbers() {
        let numbers = vec!["  1 ".to_string(), "".to_string(), "   ".to_string(), "2".to_string()];
        let results = analyzer(StaticSource(CERTIFICATE)).analyze_batch(&numbers, &[]).await;

        let seen: Vec<&str> = results.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(seen, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_critical_failure_does_not_stop_the_batch() {
        fn broken(_: &str) -> Option<String> {
            panic!("product table is malformed");
        }

        let extractor = CertificateExtractor::new(&Config::default_config().extraction).with_extractors(
            CompanyNameExtractor::new(),
            ProductNameExtractor::with_strategies(vec![("broken", broken as Strategy)]),
        );
        let analyzer = CertificateAnalyzer::with_extractor(StaticSource(CERTIFICATE), extractor);

        let numbers = vec!["1".to_string(), "2".to_string()];
        let mut seen = 0;
        let results = analyzer
            .analyze_batch_with(&numbers, &[], |_| seen += 1)
            .await;

        assert_eq!(seen, 2);
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(
                result.error.as_deref(),
                Some("Критическая ошибка: product table is malformed")
            );
            assert_eq!(result.company_name.as_deref(), Some("ООО «Агро»"));
        }
    }
}
