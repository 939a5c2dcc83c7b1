use serde::{Deserialize, Serialize};

/// Единица измерения первоначального взноса (`dp_type` в запросе расчёта)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownPaymentKind {
    #[default]
    Uzs,
    Usd,
    Percent,
}

impl DownPaymentKind {
    pub fn code(&self) -> &'static str {
        match self {
            DownPaymentKind::Uzs => "uzs",
            DownPaymentKind::Usd => "usd",
            DownPaymentKind::Percent => "percent",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "uzs" => Some(DownPaymentKind::Uzs),
            "usd" => Some(DownPaymentKind::Usd),
            "percent" => Some(DownPaymentKind::Percent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(
            serde_json::to_string(&DownPaymentKind::Percent).unwrap(),
            "\"percent\""
        );
        let parsed: DownPaymentKind = serde_json::from_str("\"usd\"").unwrap();
        assert_eq!(parsed, DownPaymentKind::Usd);
    }

    #[test]
    fn test_from_code() {
        for kind in [
            DownPaymentKind::Uzs,
            DownPaymentKind::Usd,
            DownPaymentKind::Percent,
        ] {
            assert_eq!(DownPaymentKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(DownPaymentKind::from_code("eur"), None);
    }
}
