// file: src/models/accreditation.rs
// description: exporter accreditation record built from the registry table
// reference: cerberus exporter registry columns

use serde::{Deserialize, Serialize};

pub const ENTITY_NOT_FOUND: &str = "Предприятие не найдено";
pub const TABLE_PARSE_FAILED: &str = "Не удалось распарсить таблицу";

const CHINA_MARKER: &str = "китай";
/// Columns expected in a registry row; destination and status are the last two.
const MIN_COLUMNS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccreditationResult {
    pub inn: String,
    pub destination: String,
    pub status: String,
    pub china_accredited: bool,
    pub china_status: String,
}

impl AccreditationResult {
    /// Builds the record from the cells of the first registry row.
    /// Returns `None` when the row is too short to hold destination and status.
    pub fn from_row(inn: &str, cells: &[String]) -> Option<Self> {
        if cells.len() < MIN_COLUMNS {
            return None;
        }

        let destination = cells[4].clone();
        let status = cells[5].clone();
        let china_accredited = destination.to_lowercase().contains(CHINA_MARKER);
        let china_status = if china_accredited {
            "Аккредитован на Китай"
        } else {
            "Не аккредитован на Китай"
        };

        Some(Self {
            inn: inn.to_string(),
            destination,
            status,
            china_accredited,
            china_status: china_status.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccreditationOutcome {
    Found(AccreditationResult),
    Failed { error: String },
}

impl AccreditationOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        AccreditationOutcome::Failed {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(destination: &str) -> Vec<String> {
        [
            "1",
            "ООО Агро",
            "7701234567",
            "Москва",
            destination,
            "Аттестовано",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_china_destination_detected() {
        let result = AccreditationResult::from_row("7701234567", &row("КИТАЙ, Вьетнам")).unwrap();
        assert!(result.china_accredited);
        assert_eq!(result.china_status, "Аккредитован на Китай");
        assert_eq!(result.status, "Аттестовано");
    }

    #[test]
    fn test_other_destination() {
        let result = AccreditationResult::from_row("7701234567", &row("Казахстан")).unwrap();
        assert!(!result.china_accredited);
        assert_eq!(result.china_status, "Не аккредитован на Китай");
    }

    #[test]
    fn test_five_columns_is_not_enough() {
        let mut cells = row("Китай");
        cells.pop();
        assert_eq!(cells.len(), 5);
        assert!(AccreditationResult::from_row("7701234567", &cells).is_none());
    }

    #[test]
    fn test_failed_outcome_shape() {
        let value = serde_json::to_value(AccreditationOutcome::failed(ENTITY_NOT_FOUND)).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "Предприятие не найдено" }));
    }
}
