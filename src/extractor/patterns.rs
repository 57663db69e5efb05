// file: src/extractor/patterns.rs
// description: compiled regex patterns for certificate field extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Dates
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\d{2}\.\d{2}\.\d{4}"
    ).expect("DATE_TOKEN regex is valid");

    pub static ref LABELED_DATES: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:выдан[а-я]*|дата выдачи|оформлен[а-я]*)[^0-9]{0,20}(\d{2}\.\d{2}\.\d{4})")
            .expect("issued-date regex is valid"),
        Regex::new(r"(?i)дата:\s*(\d{2}\.\d{2}\.\d{4})")
            .expect("bare-date regex is valid"),
        Regex::new(r"(?i)от\s*(\d{2}\.\d{2}\.\d{4})")
            .expect("from-date regex is valid"),
    ];

    // Taxpayer ID: 12 digits (individual) or 10 digits (legal entity), not part of a longer run
    pub static ref INN: Regex = Regex::new(
        r"(?i)ИНН\s*:?\s*(\d{12}|\d{10})(?:\D|$)"
    ).expect("INN regex is valid");

    // Certificate status vocabulary
    pub static ref STATUS_REDEEMED: Regex = Regex::new(
        r"(?i)погашен|аннулирован|отозван"
    ).expect("STATUS_REDEEMED regex is valid");

    pub static ref STATUS_ACTIVE: Regex = Regex::new(
        r"(?i)действует|активен|действующий"
    ).expect("STATUS_ACTIVE regex is valid");

    // Name cleanup
    pub static ref PARENTHESIZED: Regex = Regex::new(
        r"\(.*?\)"
    ).expect("PARENTHESIZED regex is valid");

    pub static ref INN_SUFFIX: Regex = Regex::new(
        r"(?i)ИНН\s*:?\s*\d{10,12}"
    ).expect("INN_SUFFIX regex is valid");

    pub static ref OGRN_SUFFIX: Regex = Regex::new(
        r"(?i)ОГРН[ИП]?\s*:?\s*\d{10,15}"
    ).expect("OGRN_SUFFIX regex is valid");

    pub static ref MULTI_SPACE: Regex = Regex::new(
        r"\s{2,}"
    ).expect("MULTI_SPACE regex is valid");

    pub static ref ADDRESS_TOKENS: Regex = Regex::new(
        r"(?i)россия\b|рф\b|респ\.?|край\b|обл\.?|район\b|г\.\s|пос[\. ]|д\.\s|ул\.\s|просп\.\s|пер\.\s|дом\b|кв\.\b|стр\.\b|индекс\b"
    ).expect("ADDRESS_TOKENS regex is valid");

    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"\b\d{6}\b"
    ).expect("POSTAL_CODE regex is valid");

    pub static ref LETTER: Regex = Regex::new(
        r"[A-Za-zА-Яа-яЁё]"
    ).expect("LETTER regex is valid");

    pub static ref ADDRESS_START: Regex = Regex::new(
        r"(?i),|\bРоссия\b|\bРФ\b"
    ).expect("ADDRESS_START regex is valid");

    // Sender block
    pub static ref SENDER_LABEL: Regex = Regex::new(
        r"(?i)отправитель"
    ).expect("SENDER_LABEL regex is valid");

    pub static ref STOP_HEADERS: Regex = Regex::new(
        r"(?i)получатель|recipient|receiver|грузополучатель|наименование|вид упаковки|страна|рег(\.|истрационный)?\s*номер|сертификат"
    ).expect("STOP_HEADERS regex is valid");

    pub static ref COMPANY_FIELDS: Vec<Regex> = [
        r"(?i)отправитель[:\s]*([^\n]{5,100})",
        r"(?i)организация[:\s]*([^\n]{5,100})",
        r"(?i)компания[:\s]*([^\n]{5,100})",
        r"(?i)наименование\s+организации[:\s]*([^\n]{5,100})",
        r"(?i)производитель[:\s]*([^\n]{5,100})",
        r"(?i)exporter[:\s]*([^\n]{5,100})",
        r"(?i)sender[:\s]*([^\n]{5,100})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("company field regex is valid"))
    .collect();

    pub static ref QUOTED_NAMES: Vec<Regex> = [('«', '»'), ('"', '"'), ('\'', '\''), ('“', '”')]
        .iter()
        .map(|(open, close)| {
            let pattern = format!(
                "{}([^{}]+){}",
                regex::escape(&open.to_string()),
                regex::escape(&close.to_string()),
                regex::escape(&close.to_string())
            );
            Regex::new(&pattern).expect("quoted name regex is valid")
        })
        .collect();

    pub static ref DOCUMENT_VOCABULARY: Regex = Regex::new(
        r"(?i)сертификат|certificate|рег\.\s*номер"
    ).expect("DOCUMENT_VOCABULARY regex is valid");

    // Product name
    pub static ref PRODUCT_HEADER: Regex = Regex::new(
        r"(?i)наименование\s+подкарантинной\s+продукции|наименование\s+груза|наименование\s+материала|product\s+name"
    ).expect("PRODUCT_HEADER regex is valid");

    pub static ref BARE_NAME_HEADER: Regex = Regex::new(
        r"(?i)наименование"
    ).expect("BARE_NAME_HEADER regex is valid");

    pub static ref ORGANIZATION_WORD: Regex = Regex::new(
        r"(?i)организации"
    ).expect("ORGANIZATION_WORD regex is valid");

    pub static ref QUANTITY_TAIL: Regex = Regex::new(
        r"\s{2,}|\s\d+(,\d+)?\s?(т|кг|тонн|шт)\b"
    ).expect("QUANTITY_TAIL regex is valid");

    pub static ref CROP_NAME: Regex = Regex::new(
        r"(?i)(семена|зерн(о|а)|боб[ыа]|пшениц[аы]|ячмен[ья]|рож[ьи]|овёс|овес|горох|чечевица|кукуруза|лен|льн[аы]|рапс)[^;\n]{0,80}"
    ).expect("CROP_NAME regex is valid");
}

/// Bare "наименование" counts as a product header unless the rest of the line
/// names an organization.
pub fn is_product_header(line: &str) -> bool {
    if PRODUCT_HEADER.is_match(line) {
        return true;
    }
    BARE_NAME_HEADER
        .find_iter(line)
        .any(|m| !ORGANIZATION_WORD.is_match(&line[m.end()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inn_pattern_lengths() {
        let capture = |text: &str| INN.captures(text).map(|c| c[1].to_string());

        assert_eq!(capture("ИНН: 7701234567"), Some("7701234567".to_string()));
        assert_eq!(capture("ИНН 770123456789"), Some("770123456789".to_string()));
        assert_eq!(capture("ИНН 770123456"), None);
        assert_eq!(capture("ИНН 7701234567891"), None);
    }

    #[test]
    fn test_address_tokens() {
        assert!(ADDRESS_TOKENS.is_match("Краснодарский край"));
        assert!(ADDRESS_TOKENS.is_match("г. Москва"));
        assert!(!ADDRESS_TOKENS.is_match("ООО Агроимпорт"));
        assert!(POSTAL_CODE.is_match("350000 Краснодар"));
    }

    #[test]
    fn test_product_header_excludes_organization() {
        assert!(is_product_header("Наименование подкарантинной продукции:"));
        assert!(is_product_header("Наименование"));
        assert!(is_product_header("Product name: wheat"));
        assert!(!is_product_header("Наименование организации: ООО Ромашка"));
    }

    #[test]
    fn test_quoted_names_use_matching_pairs() {
        let captured = QUOTED_NAMES[0]
            .captures("ООО «АГРОМЕР» Россия")
            .map(|c| c[1].to_string());
        assert_eq!(captured, Some("АГРОМЕР".to_string()));
    }
}
