// file: src/extractor/date.rs
// description: certificate issue date extraction and freshness classification
// reference: https://docs.rs/chrono

use crate::extractor::patterns::{DATE_TOKEN, LABELED_DATES};
use crate::models::Validity;
use chrono::{Duration, NaiveDate};

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Returns the issue date as it appears in the text (`DD.MM.YYYY`).
///
/// Labeled forms are tried first in priority order ("выдан"/"дата выдачи"/
/// "оформлен", then "дата:", then "от"). Without a label the last date-shaped
/// token in the document wins, since the issue date is usually printed after
/// the shipment dates.
pub fn extract_issue_date(text: &str) -> Option<String> {
    for pattern in LABELED_DATES.iter() {
        if let Some(captures) = pattern.captures(text) {
            return Some(captures.get(1)?.as_str().to_string());
        }
    }

    DATE_TOKEN
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
}

/// Classifies a raw date against `today`: issued within `freshness_days`
/// (inclusive) is valid, older is expired.
pub fn classify_validity(raw: Option<&str>, today: NaiveDate, freshness_days: i64) -> Validity {
    let Some(raw) = raw else {
        return Validity::Unknown;
    };

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(issued) if issued >= today - Duration::days(freshness_days) => Validity::Valid,
        Ok(_) => Validity::Expired,
        Err(_) => Validity::BadDateFormat,
    }
}
