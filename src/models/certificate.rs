// file: src/models/certificate.rs
// description: per-certificate analysis record returned by the check endpoint
// reference: quarantine certificate field layout

use serde::{Deserialize, Serialize};

/// Placeholder used for `date_raw` and `validity` when no date was extracted.
pub const ABSENT: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertStatus {
    #[serde(rename = "Погашен")]
    Redeemed,
    #[serde(rename = "Действует")]
    Active,
}

impl CertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertStatus::Redeemed => "Погашен",
            CertStatus::Active => "Действует",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    #[serde(rename = "Действующий")]
    Valid,
    #[serde(rename = "Просрочен")]
    Expired,
    #[serde(rename = "Неверный формат даты")]
    BadDateFormat,
    #[serde(rename = "-")]
    Unknown,
}

impl Validity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::Valid => "Действующий",
            Validity::Expired => "Просрочен",
            Validity::BadDateFormat => "Неверный формат даты",
            Validity::Unknown => ABSENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateResult {
    pub number: String,
    pub found: bool,
    pub found_keywords: Vec<String>,
    pub date_raw: String,
    pub inn: Option<String>,
    pub company_name: Option<String>,
    pub product_name: Option<String>,
    pub cert_status: Option<CertStatus>,
    pub validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl CertificateResult {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            found: false,
            found_keywords: Vec::new(),
            date_raw: ABSENT.to_string(),
            inn: None,
            company_name: None,
            product_name: None,
            cert_status: None,
            validity: Validity::Unknown,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
