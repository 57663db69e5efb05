// file: src/pipeline/extraction.rs
// description: field extraction over already fetched certificate text
// reference: per-item failure isolation

use crate::config::ExtractionConfig;
use crate::extractor::{
    CompanyNameExtractor, ProductNameExtractor, classify_validity, extract_certificate_status,
    extract_inn, extract_issue_date, search_keywords,
};
use crate::models::CertificateResult;
use chrono::{Local, NaiveDate};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Runs every field extractor over one certificate's text.
#[derive(Debug, Clone)]
pub struct CertificateExtractor {
    company: CompanyNameExtractor,
    product: ProductNameExtractor,
    freshness_days: i64,
}

impl CertificateExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            company: CompanyNameExtractor::new(),
            product: ProductNameExtractor::new(),
            freshness_days: config.freshness_days,
        }
    }

    pub fn with_extractors(mut self, company: CompanyNameExtractor, product: ProductNameExtractor) -> Self {
        self.company = company;
        self.product = product;
        self
    }

    pub fn extract(&self, number: &str, text: &str, keywords: &[String]) -> CertificateResult {
        self.extract_at(number, text, keywords, Local::now().date_naive())
    }

    /// An unexpected failure is attached to the record as a critical error;
    /// fields filled before it are kept.
    pub fn extract_at(
        &self,
        number: &str,
        text: &str,
        keywords: &[String],
        today: NaiveDate,
    ) -> CertificateResult {
        let mut result = CertificateResult::new(number);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.populate(&mut result, text, keywords, today)
        }));

        if let Err(payload) = outcome {
            let message = panic_message(payload.as_ref());
            error!("Critical error while analyzing {}: {}", number, message);
            result.error = Some(format!("Критическая ошибка: {}", message));
        }

        result
    }

    fn populate(&self, result: &mut CertificateResult, text: &str, keywords: &[String], today: NaiveDate) {
        let (found, found_keywords) = search_keywords(text, keywords);
        result.found = found;
        result.found_keywords = found_keywords;

        let raw_date = extract_issue_date(text);
        result.validity = classify_validity(raw_date.as_deref(), today, self.freshness_days);
        if let Some(raw_date) = raw_date {
            result.date_raw = raw_date;
        }

        result.inn = extract_inn(text);
        result.company_name = self.company.extract(text);
        result.product_name = self.product.extract(text);
        result.cert_status = extract_certificate_status(text);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}
