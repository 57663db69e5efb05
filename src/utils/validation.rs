// file: src/utils/validation.rs
// description: input validation helpers for certificate numbers, registry ids and paths
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::path::Path;

/// Characters that would change the meaning of the portal URL.
const URL_STRUCTURAL: &[char] = &['/', '\\', '?', '#', '%', '&'];

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "Файл не найден: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(PipelineError::Validation(format!(
                "Путь не является файлом: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn is_pdf_path(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
    }

    pub fn validate_certificate_number(number: &str) -> Result<()> {
        if number.trim().is_empty() {
            return Err(PipelineError::Validation(
                "Не указан номер сертификата".to_string(),
            ));
        }

        if number.contains(URL_STRUCTURAL) || number.chars().any(char::is_whitespace) {
            return Err(PipelineError::Validation(format!(
                "Недопустимые символы в номере сертификата: {}",
                number
            )));
        }

        Ok(())
    }

    /// INN (10/12 digits) or OGRN (13/15 digits); the registry accepts both.
    pub fn validate_registry_id(id: &str) -> Result<()> {
        let digits_only = !id.is_empty() && id.chars().all(|c| c.is_ascii_digit());
        if !digits_only || ![10, 12, 13, 15].contains(&id.len()) {
            return Err(PipelineError::Validation(format!(
                "Ожидается ИНН из 10/12 цифр или ОГРН из 13/15 цифр: {}",
                id
            )));
        }
        Ok(())
    }
}
