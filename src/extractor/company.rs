// file: src/extractor/company.rs
// description: sender / company name extraction through an ordered heuristic chain
// reference: phytosanitary certificate sender block layout

use crate::extractor::patterns::{
    COMPANY_FIELDS, DOCUMENT_VOCABULARY, QUOTED_NAMES, SENDER_LABEL, STOP_HEADERS,
};
use crate::extractor::text::{
    cleanup_name, cut_before_address, is_good_name, looks_like_address, normalize_lines,
    truncate_chars,
};
use crate::extractor::{Strategy, first_success};
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

const MAX_NAME_CHARS: usize = 100;
/// Lines below a sender header that may still hold the name.
const SENDER_LOOKAHEAD: usize = 3;
const MIN_FREE_LINE_CHARS: usize = 30;

const STRATEGIES: [(&str, Strategy); 4] = [
    ("sender block", sender_block),
    ("labeled field", labeled_field),
    ("quoted name", quoted_name),
    ("long line", long_line),
];

#[derive(Debug, Clone)]
pub struct CompanyNameExtractor {
    strategies: Vec<(&'static str, Strategy)>,
}

impl CompanyNameExtractor {
    pub fn new() -> Self {
        Self::with_strategies(STRATEGIES.to_vec())
    }

    pub fn with_strategies(strategies: Vec<(&'static str, Strategy)>) -> Self {
        Self { strategies }
    }

    /// Finds the sender's name. Any failure inside the heuristics degrades to
    /// `None`; it never propagates to the caller.
    pub fn extract(&self, text: &str) -> Option<String> {
        match panic::catch_unwind(AssertUnwindSafe(|| first_success(text, &self.strategies))) {
            Ok(name) => name.map(|n| truncate_chars(&n, MAX_NAME_CHARS)),
            Err(_) => {
                warn!("Company name heuristics failed; leaving field empty");
                None
            }
        }
    }
}

impl Default for CompanyNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn extract_company_name(text: &str) -> Option<String> {
    CompanyNameExtractor::new().extract(text)
}

/// Prefers the name without its trailing address, as long as what is left
/// still reads as a name.
fn prefer_name_part(candidate: String) -> String {
    let left = cut_before_address(&candidate);
    if is_good_name(left) {
        left.to_string()
    } else {
        candidate
    }
}

/// "Отправитель ... : <name>, <address>" or the header followed by the name on
/// one of the next lines.
fn sender_block(text: &str) -> Option<String> {
    let lines = normalize_lines(text);

    for (i, line) in lines.iter().enumerate() {
        if !SENDER_LABEL.is_match(line) {
            continue;
        }

        if let Some((_, after)) = line.split_once(':') {
            let after = cleanup_name(after.trim());
            if !after.is_empty() {
                let left = cut_before_address(&after);
                if is_good_name(left) {
                    return Some(left.to_string());
                }
            }
        }

        if let Some(name) = scan_following_lines(&lines[i + 1..]) {
            return Some(name);
        }
    }

    None
}

fn scan_following_lines(following: &[&str]) -> Option<String> {
    for raw in following.iter().take(SENDER_LOOKAHEAD) {
        let candidate = cleanup_name(raw);
        if candidate.is_empty() || looks_like_address(&candidate) {
            continue;
        }
        if STOP_HEADERS.is_match(&candidate) {
            break;
        }
        if is_good_name(&candidate) {
            return Some(prefer_name_part(candidate));
        }
    }
    None
}

/// Explicit "<label>: <name>" fields for layouts without a sender block.
fn labeled_field(text: &str) -> Option<String> {
    COMPANY_FIELDS.iter().find_map(|pattern| {
        let captured = pattern.captures(text)?.get(1)?;
        let name = cleanup_name(captured.as_str());
        is_good_name(&name).then_some(name)
    })
}

fn quoted_name(text: &str) -> Option<String> {
    QUOTED_NAMES.iter().find_map(|pattern| {
        pattern.captures_iter(text).find_map(|captures| {
            let name = cleanup_name(captures.get(1)?.as_str());
            is_good_name(&name).then_some(name)
        })
    })
}

fn long_line(text: &str) -> Option<String> {
    text.split('\n').find_map(|line| {
        let line = cleanup_name(line);
        (line.chars().count() > MIN_FREE_LINE_CHARS && !DOCUMENT_VOCABULARY.is_match(&line))
            .then_some(line)
    })
}
