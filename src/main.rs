// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use phytocert::{
    AccreditationLookup, CertificateAnalyzer, CertificateExtractor, ChromeTableScraper, Config,
    JsonExporter, PortalClient, ProgressTracker, Validator,
    api::{self, AppState},
    fetcher::pdf,
    utils::logging::{format_certificate, format_error, format_info, format_success, format_warning},
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "phytocert")]
#[command(version)]
#[command(about = "Quarantine certificate field extraction and exporter accreditation lookup", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch certificates from the portal and extract their fields
    Check {
        #[arg(required = true)]
        numbers: Vec<String>,

        /// Keyword to look for; repeat for several (defaults from config)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Also write a JSON report into this directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Extract fields from a local PDF or plain-text file
    Extract {
        file: PathBuf,

        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
    },

    /// Look up an exporter in the accreditation registry
    Accreditation {
        inn: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    phytocert::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(&config, host, port).await?;
        }
        Commands::Check {
            numbers,
            keywords,
            output,
            pretty,
        } => {
            cmd_check(&config, &numbers, keywords, output, pretty, cli.color).await?;
        }
        Commands::Extract { file, keywords } => {
            cmd_extract(&config, &file, keywords).await?;
        }
        Commands::Accreditation { inn } => {
            cmd_accreditation(&config, &inn).await?;
        }
    }

    Ok(())
}

fn keywords_or_default(keywords: Vec<String>, config: &Config) -> Vec<String> {
    if keywords.is_empty() {
        config.extraction.default_keywords.clone()
    } else {
        keywords
    }
}

async fn cmd_serve(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let client = PortalClient::new(config.portal.clone()).context("Failed to create portal client")?;
    let analyzer = CertificateAnalyzer::new(client, &config.extraction);
    let accreditation = AccreditationLookup::new(ChromeTableScraper::new(config.accreditation.clone()));
    let state = AppState::new(
        analyzer,
        accreditation,
        config.extraction.default_keywords.clone(),
    );

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    info!("Listening on {}:{}", host, port);
    axum::serve(listener, api::router(state))
        .await
        .context("HTTP server terminated")?;

    Ok(())
}

async fn cmd_check(
    config: &Config,
    numbers: &[String],
    keywords: Vec<String>,
    output: Option<PathBuf>,
    pretty: bool,
    colored: bool,
) -> Result<()> {
    let keywords = keywords_or_default(keywords, config);

    info!(
        "Checking {} certificate(s) for keywords: {}",
        numbers.len(),
        keywords.join(", ")
    );

    let client = PortalClient::new(config.portal.clone()).context("Failed to create portal client")?;
    let analyzer = CertificateAnalyzer::new(client, &config.extraction);

    let tracker = ProgressTracker::with_color(numbers.len(), colored);
    let results = analyzer
        .analyze_batch_with(numbers, &keywords, |result| tracker.record(result))
        .await;
    tracker.finish();
    let stats = tracker.get_stats();

    for result in &results {
        println!("{}", format_certificate(result));
    }

    println!(
        "\n{}",
        format_info(&format!(
            "Checked: {} | Failed: {} | Keyword hits: {} | Success rate: {:.1}% | {}s",
            stats.certificates_checked,
            stats.certificates_failed,
            stats.keyword_hits,
            stats.success_rate(),
            stats.duration_secs
        ))
    );

    if let Some(dir) = output {
        let exporter = JsonExporter::new(dir).context("Failed to prepare output directory")?;
        info!("Writing report into {}", exporter.output_dir().display());
        let path = exporter
            .export_results(&results, pretty)
            .context("Failed to write JSON report")?;
        println!("{}", format_success(&format!("Report written to {}", path.display())));
    }

    Ok(())
}

async fn cmd_extract(config: &Config, file: &Path, keywords: Vec<String>) -> Result<()> {
    Validator::validate_file_path(file)?;
    let keywords = keywords_or_default(keywords, config);

    let text = if Validator::is_pdf_path(file) {
        let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
        tokio::task::spawn_blocking(move || pdf::extract_text(&bytes))
            .await
            .context("PDF extraction task failed")??
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?
    };

    let number = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = CertificateExtractor::new(&config.extraction).extract(&number, &text, &keywords);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn cmd_accreditation(config: &Config, inn: &str) -> Result<()> {
    let inn = inn.trim();
    if let Err(e) = Validator::validate_registry_id(inn) {
        eprintln!("{}", format_warning(&e.to_string()));
    }

    let lookup = AccreditationLookup::new(ChromeTableScraper::new(config.accreditation.clone()));
    let outcome = lookup.lookup(inn).await;

    if let phytocert::AccreditationOutcome::Failed { error } = &outcome {
        eprintln!("{}", format_error(error));
    }

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
