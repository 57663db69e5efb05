// file: src/extractor/product.rs
// description: quarantined product name extraction from header blocks with a crop vocabulary fallback
// reference: phytosanitary certificate product table layout

use crate::extractor::patterns::{CROP_NAME, QUANTITY_TAIL, is_product_header};
use crate::extractor::text::{cleanup_name, normalize_lines, strip_parentheticals, truncate_chars};
use crate::extractor::{Strategy, first_success};

const MAX_PRODUCT_CHARS: usize = 200;
const PRODUCT_LOOKAHEAD: usize = 4;
const MIN_PRODUCT_CHARS: usize = 3;

/// Column headers that sit next to the product name and must not be taken for it.
const SERVICE_WORDS: [&str; 5] = ["количество", "количество (объем)", "объем", "вес", "масса"];

const STRATEGIES: [(&str, Strategy); 2] = [
    ("product header", header_block),
    ("crop vocabulary", crop_vocabulary),
];

#[derive(Debug, Clone)]
pub struct ProductNameExtractor {
    strategies: Vec<(&'static str, Strategy)>,
}

impl ProductNameExtractor {
    pub fn new() -> Self {
        Self::with_strategies(STRATEGIES.to_vec())
    }

    pub fn with_strategies(strategies: Vec<(&'static str, Strategy)>) -> Self {
        Self { strategies }
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        first_success(text, &self.strategies).map(|name| truncate_chars(&name, MAX_PRODUCT_CHARS))
    }
}

impl Default for ProductNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn extract_product_name(text: &str) -> Option<String> {
    ProductNameExtractor::new().extract(text)
}

fn is_service_word(s: &str) -> bool {
    let lower = s.to_lowercase();
    SERVICE_WORDS.contains(&lower.as_str())
}

fn long_enough(s: &str) -> bool {
    s.chars().count() > MIN_PRODUCT_CHARS
}

/// The quantity column often shares the line with the name.
fn cut_quantity_tail(s: &str) -> &str {
    match QUANTITY_TAIL.find(s) {
        Some(m) => s[..m.start()].trim(),
        None => s.trim(),
    }
}

fn header_block(text: &str) -> Option<String> {
    let lines = normalize_lines(text);

    for (i, line) in lines.iter().enumerate() {
        if !is_product_header(line) {
            continue;
        }

        if let Some((_, after)) = line.split_once(':') {
            let after = strip_parentheticals(after);
            if !after.is_empty() && !is_service_word(&after) && long_enough(&after) {
                return Some(after);
            }
        }

        for raw in lines[i + 1..].iter().take(PRODUCT_LOOKAHEAD) {
            let candidate = strip_parentheticals(raw);
            if candidate.is_empty() || is_service_word(&candidate) {
                continue;
            }
            let candidate = cut_quantity_tail(&candidate);
            if long_enough(candidate) {
                return Some(candidate.to_string());
            }
        }
    }

    None
}

fn crop_vocabulary(text: &str) -> Option<String> {
    CROP_NAME.find(text).map(|m| cleanup_name(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_after_colon() {
        let text = "Наименование подкарантинной продукции: Пшеница мягкая (продовольственная)";
        assert_eq!(extract_product_name(text), Some("Пшеница мягкая".to_string()));
    }

    #[test]
    fn test_next_line_with_quantity_column() {
        let text = "Наименование подкарантинной продукции\n\
                    Количество (объем)\n\
                    Пшеница мягкая  12,500 т\n";
        assert_eq!(extract_product_name(text), Some("Пшеница мягкая".to_string()));
    }

    #[test]
    fn test_quantity_with_unit_and_single_space() {
        let text = "Наименование груза:\nЯчмень пивоваренный 20 тонн\n";
        assert_eq!(
            extract_product_name(text),
            Some("Ячмень пивоваренный".to_string())
        );
    }

    #[test]
    fn test_service_word_after_colon_is_skipped() {
        let text = "Наименование продукции: Вес\nСемена подсолнечника\n";
        assert_eq!(
            extract_product_name(text),
            Some("Семена подсолнечника".to_string())
        );
    }

    #[test]
    fn test_organization_name_is_not_a_product_header() {
        let text = "Наименование организации: ООО Ромашка\nГорох продовольственный; 20 т";
        assert_eq!(
            extract_product_name(text),
            Some("Горох продовольственный".to_string())
        );
    }

    #[test]
    fn test_crop_fallback_when_no_header() {
        let text = "Груз: кукуруза фуражная (урожай 2023); партия 5";
        assert_eq!(
            extract_product_name(text),
            Some("кукуруза фуражная".to_string())
        );
    }

    #[test]
    fn test_custom_strategy_chain() {
        fn fixed(_: &str) -> Option<String> {
            Some("Семена льна".to_string())
        }

        let extractor = ProductNameExtractor::with_strategies(vec![("fixed", fixed as Strategy)]);
        assert_eq!(extractor.extract(""), Some("Семена льна".to_string()));
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(extract_product_name("Номер 123\nДата 01.01.2024"), None);
    }

    #[test]
    fn test_output_is_truncated() {
        let text = format!("Product name: {}", "x".repeat(300));
        assert_eq!(extract_product_name(&text).unwrap().chars().count(), 200);
    }
}
