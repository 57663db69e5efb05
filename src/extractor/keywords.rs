// file: src/extractor/keywords.rs
// description: case-insensitive literal keyword search over certificate text
// reference: https://docs.rs/regex

use regex::RegexBuilder;
use tracing::warn;

/// Returns whether any keyword occurs and the matching keywords in input order.
/// Keywords are matched literally; regex metacharacters carry no meaning.
pub fn search_keywords(text: &str, keywords: &[String]) -> (bool, Vec<String>) {
    let found: Vec<String> = keywords
        .iter()
        .filter(|kw| !kw.is_empty())
        .filter(|kw| {
            match RegexBuilder::new(&regex::escape(kw))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => re.is_match(text),
                Err(e) => {
                    warn!("Skipping keyword {:?}: {}", kw, e);
                    false
                }
            }
        })
        .cloned()
        .collect();

    (!found.is_empty(), found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_and_input_order() {
        let text = "Обнаружен ЭГИЛОПС цилиндрический, амброзия не выявлена";
        let (found, matched) = search_keywords(text, &kws(&["амброзия", "Эгилопс", "повилика"]));

        assert!(found);
        assert_eq!(matched, kws(&["амброзия", "Эгилопс"]));
    }

    #[test]
    fn test_keyword_is_literal() {
        let (found, _) = search_keywords("номер 77a1", &kws(&["77.1"]));
        assert!(!found);

        let (found, matched) = search_keywords("номер 77.1", &kws(&["77.1"]));
        assert!(found);
        assert_eq!(matched, kws(&["77.1"]));
    }

    #[test]
    fn test_empty_keywords_ignored() {
        let (found, matched) = search_keywords("любой текст", &kws(&["", ""]));
        assert!(!found);
        assert!(matched.is_empty());
    }
}
