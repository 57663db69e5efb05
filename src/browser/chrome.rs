// file: src/browser/chrome.rs
// description: headless chrome driver for the exporter accreditation registry
// reference: https://docs.rs/headless_chrome

use crate::browser::{TableSource, table};
use crate::config::AccreditationConfig;
use crate::error::{PipelineError, Result};
use headless_chrome::{Browser, LaunchOptions};
use std::time::Duration;
use tracing::{debug, info};

/// Renders the registry page in a fresh headless Chrome per lookup.
#[derive(Debug, Clone)]
pub struct ChromeTableScraper {
    config: AccreditationConfig,
}

impl ChromeTableScraper {
    pub fn new(config: AccreditationConfig) -> Self {
        Self { config }
    }

    pub fn registry_url(&self, inn: &str) -> String {
        self.config.url_template.replace("{}", inn)
    }

    /// Blocking: launches the browser, waits for the results table and returns
    /// the page HTML.
    fn render(config: &AccreditationConfig, url: &str) -> Result<String> {
        let navigation_timeout = Duration::from_secs(config.navigation_timeout_secs);
        let table_timeout = Duration::from_secs(config.table_timeout_secs);

        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .sandbox(false)
            .idle_browser_timeout(navigation_timeout + table_timeout)
            .build()
            .map_err(|e| PipelineError::Browser(format!("Invalid browser options: {}", e)))?;

        let browser = Browser::new(options).map_err(browser_error)?;
        let tab = browser.new_tab().map_err(browser_error)?;
        tab.set_default_timeout(navigation_timeout);

        debug!("Navigating to {}", url);
        tab.navigate_to(url).map_err(browser_error)?;
        tab.wait_until_navigated().map_err(browser_error)?;

        tab.wait_for_element_with_custom_timeout(&config.table_selector, table_timeout)
            .map_err(browser_error)?;

        tab.get_content().map_err(browser_error)
    }
}

fn browser_error(e: impl std::fmt::Display) -> PipelineError {
    PipelineError::Browser(e.to_string())
}

impl TableSource for ChromeTableScraper {
    async fn first_row(&self, inn: &str) -> Result<Option<Vec<String>>> {
        let url = self.registry_url(inn);
        info!("Looking up accreditation for INN {}", inn);

        let config = self.config.clone();
        let html = tokio::task::spawn_blocking(move || Self::render(&config, &url))
            .await
            .map_err(browser_error)??;

        table::first_row_cells(&html, &self.config.row_selector)
    }
}
