// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub portal: PortalConfig,
    pub accreditation: AccreditationConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalConfig {
    /// `{}` is replaced with the certificate number.
    pub url_template: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    pub user_agent: String,
    pub accept_language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccreditationConfig {
    /// `{}` is replaced with the taxpayer ID.
    pub url_template: String,
    pub navigation_timeout_secs: u64,
    pub table_timeout_secs: u64,
    pub table_selector: String,
    pub row_selector: String,
    pub headless: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub default_keywords: Vec<String>,
    pub freshness_days: i64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PHYTOCERT")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("extraction.default_keywords")
                .try_parsing(true),
        );

        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            builder = builder
                .set_override("server.port", port as i64)
                .map_err(|e| PipelineError::Config(e.to_string()))?;
        }

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 10000,
            },
            portal: PortalConfig {
                url_template: "https://new.fitorf.ru/validate/ks/{}/print".to_string(),
                timeout_secs: 30,
                max_retries: 3,
                retry_backoff_ms: 1000,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                    .to_string(),
                accept_language: "ru-RU,ru;q=0.9".to_string(),
            },
            accreditation: AccreditationConfig {
                url_template: "https://cerberus.vetrf.ru/cerberus/certified/exporter/pub?businessEntityInnOgrn={}"
                    .to_string(),
                navigation_timeout_secs: 60,
                table_timeout_secs: 15,
                table_selector: "table.table".to_string(),
                row_selector: "table.table tbody tr".to_string(),
                headless: true,
            },
            extraction: ExtractionConfig {
                default_keywords: vec!["Эгилопс".to_string()],
                freshness_days: 30,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(PipelineError::Config("server.port cannot be 0".to_string()));
        }

        if self.portal.max_retries == 0 {
            return Err(PipelineError::Config(
                "portal.max_retries must be greater than 0".to_string(),
            ));
        }

        if self.portal.timeout_secs == 0
            || self.accreditation.navigation_timeout_secs == 0
            || self.accreditation.table_timeout_secs == 0
        {
            return Err(PipelineError::Config(
                "timeouts must be greater than 0".to_string(),
            ));
        }

        if self.extraction.freshness_days < 0 {
            return Err(PipelineError::Config(
                "extraction.freshness_days cannot be negative".to_string(),
            ));
        }

        validate_template("portal.url_template", &self.portal.url_template)?;
        validate_template(
            "accreditation.url_template",
            &self.accreditation.url_template,
        )?;

        Ok(())
    }
}

fn validate_template(name: &str, template: &str) -> Result<()> {
    if !template.starts_with("http://") && !template.starts_with("https://") {
        return Err(PipelineError::Config(format!(
            "{} must be an http(s) URL: {}",
            name, template
        )));
    }
    if !template.contains("{}") {
        return Err(PipelineError::Config(format!(
            "{} must contain a {{}} placeholder",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.portal.max_retries, 3);
        assert_eq!(config.extraction.default_keywords, vec!["Эгилопс"]);
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let mut config = Config::default_config();
        config.portal.url_template = "https://new.fitorf.ru/validate/ks/print".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_retries_rejected() {
        let mut config = Config::default_config();
        config.portal.max_retries = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phytocert.toml");
        fs::write(&path, "[portal]\ntimeout_secs = 5\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.portal.timeout_secs, 5);
        assert_eq!(config.portal.max_retries, 3);
        assert_eq!(config.accreditation.table_selector, "table.table");
    }
}
