// file: src/extractor/inn.rs
// description: taxpayer identification number extraction
// reference: russian INN format (10 digits legal entity, 12 digits individual)

use crate::extractor::patterns::INN;

pub fn extract_inn(text: &str) -> Option<String> {
    INN.captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}
