// file: src/exporter/json.rs
// description: json report writer for command-line certificate checks

use crate::error::Result;
use crate::models::CertificateResult;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub exported_at: String,
    pub total: usize,
    pub failed: usize,
    pub keyword_hits: usize,
    pub results: &'a [CertificateResult],
}

impl<'a> CheckReport<'a> {
    pub fn new(results: &'a [CertificateResult]) -> Self {
        Self {
            exported_at: Utc::now().to_rfc3339(),
            total: results.len(),
            failed: results.iter().filter(|r| r.is_failed()).count(),
            keyword_hits: results.iter().filter(|r| r.found).count(),
            results,
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `certificates-<timestamp>.json` and returns its path.
    pub fn export_results(&self, results: &[CertificateResult], pretty: bool) -> Result<PathBuf> {
        let report = CheckReport::new(results);
        let file_name = format!("certificates-{}.json", Utc::now().format("%Y%m%dT%H%M%S%.3f"));
        let path = self.output_dir.join(file_name);

        let json = if pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        fs::write(&path, json)?;

        info!(
            "Exported {} result(s) ({} failed) to {}",
            report.total,
            report.failed,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("reports/2024");
        let exporter = JsonExporter::new(&nested).unwrap();
        assert!(exporter.output_dir().is_dir());
    }

    #[test]
    fn test_export_results_report_shape() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let mut hit = CertificateResult::new("1");
        hit.found = true;
        let results = vec![hit, CertificateResult::new("2").with_error("Ошибка сети: timeout")];

        let path = exporter.export_results(&results, true).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["keyword_hits"], 1);
        assert_eq!(value["results"][1]["error"], "Ошибка сети: timeout");
    }
}
