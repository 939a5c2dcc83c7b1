use serde::{Deserialize, Serialize};

/// Валюта отображения денежных значений в отчётах
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "UZS")]
    Uzs,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Код валюты (хранится в localStorage и передаётся в query string экспорта)
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Uzs => "UZS",
            Currency::Usd => "USD",
        }
    }

    /// Символ-префикс для конвертированных сумм
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Uzs => "",
            Currency::Usd => "$",
        }
    }

    /// Все поддерживаемые валюты
    pub fn all() -> Vec<Currency> {
        vec![Currency::Uzs, Currency::Usd]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "UZS" => Some(Currency::Uzs),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for currency in Currency::all() {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Currency::from_code("EUR"), None);
        assert_eq!(Currency::from_code(""), None);
        assert_eq!(Currency::from_code("usd"), None);
    }

    #[test]
    fn test_default_is_base_currency() {
        assert_eq!(Currency::default(), Currency::Uzs);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let parsed: Currency = serde_json::from_str("\"UZS\"").unwrap();
        assert_eq!(parsed, Currency::Uzs);
    }
}
