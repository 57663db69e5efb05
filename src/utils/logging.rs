// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored console summaries

use crate::models::CertificateResult;
use crate::models::certificate::ABSENT;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

/// One console line per certificate: errors in red, keyword hits in yellow.
pub fn format_certificate(result: &CertificateResult) -> String {
    if let Some(error) = &result.error {
        return format_error(&format!("{}: {}", result.number, error));
    }

    let summary = format!(
        "{} | {} | {} | {} | {} | {}",
        result.number,
        result.date_raw,
        result.validity.as_str(),
        result.cert_status.map_or(ABSENT, |status| status.as_str()),
        result.company_name.as_deref().unwrap_or(ABSENT),
        result.product_name.as_deref().unwrap_or(ABSENT),
    );

    if result.found {
        format_warning(&format!(
            "{} | keywords: {}",
            summary,
            result.found_keywords.join(", ")
        ))
    } else {
        format_success(&summary)
    }
}
