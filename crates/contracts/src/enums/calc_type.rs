use serde::{Deserialize, Serialize};

/// Каким калькулятором получен результат расчёта.
/// Тег попадает в параметр `calc_type` ссылки на КП.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcType {
    StandardInstallment,
    DpInstallment,
}

impl CalcType {
    pub fn tag(&self) -> &'static str {
        match self {
            CalcType::StandardInstallment => "standard_installment",
            CalcType::DpInstallment => "dp_installment",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "standard_installment" => Some(CalcType::StandardInstallment),
            "dp_installment" => Some(CalcType::DpInstallment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(CalcType::StandardInstallment.tag(), "standard_installment");
        assert_eq!(CalcType::DpInstallment.tag(), "dp_installment");
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(
            CalcType::from_tag("dp_installment"),
            Some(CalcType::DpInstallment)
        );
        assert_eq!(CalcType::from_tag("unknown"), None);
    }

    #[test]
    fn test_serde_matches_tag() {
        for calc_type in [CalcType::StandardInstallment, CalcType::DpInstallment] {
            let json = serde_json::to_string(&calc_type).unwrap();
            assert_eq!(json, format!("\"{}\"", calc_type.tag()));
        }
    }
}
