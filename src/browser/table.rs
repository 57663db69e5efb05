// file: src/browser/table.rs
// description: extraction of the first data row from rendered registry html
// reference: https://docs.rs/scraper

use crate::error::{PipelineError, Result};
use scraper::{Html, Selector};

/// Text of every `td` cell in the first row matched by `row_selector`, with
/// whitespace collapsed. `None` when no row matches.
pub fn first_row_cells(html: &str, row_selector: &str) -> Result<Option<Vec<String>>> {
    let row_selector = Selector::parse(row_selector)
        .map_err(|e| PipelineError::Config(format!("Invalid row selector: {}", e)))?;
    let cell_selector = Selector::parse("td")
        .map_err(|e| PipelineError::Config(format!("Invalid cell selector: {}", e)))?;

    let document = Html::parse_document(html);
    let Some(row) = document.select(&row_selector).next() else {
        return Ok(None);
    };

    let cells = row
        .select(&cell_selector)
        .map(|cell| {
            cell.text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Ok(Some(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROW_SELECTOR: &str = "table.table tbody tr";

    #[test]
    fn test_first_row_only() {
        let html = r#"
            <table class="table">
              <thead><tr><th>№</th><th>Наименование</th></tr></thead>
              <tbody>
                <tr><td>1</td><td> ООО
                    «Агро» </td><td>2310031475</td><td>Краснодар</td><td>Китай</td><td>Аттестовано</td></tr>
                <tr><td>2</td><td>ООО Другое</td></tr>
              </tbody>
            </table>"#;

        let cells = first_row_cells(html, ROW_SELECTOR).unwrap().unwrap();
        assert_eq!(
            cells,
            vec!["1", "ООО «Агро»", "2310031475", "Краснодар", "Китай", "Аттестовано"]
        );
    }

    #[test]
    fn test_empty_table() {
        let html = r#"<table class="table"><tbody></tbody></table>"#;
        assert_eq!(first_row_cells(html, ROW_SELECTOR).unwrap(), None);
    }

    #[test]
    fn test_other_tables_ignored() {
        let html = r#"<table class="layout"><tbody><tr><td>menu</td></tr></tbody></table>"#;
        assert_eq!(first_row_cells(html, ROW_SELECTOR).unwrap(), None);
    }

    #[test]
    fn test_invalid_selector() {
        assert!(first_row_cells("<p></p>", "tr[").is_err());
    }
}
