//! Поля дополнительных скидок и их валидация перед отправкой расчёта

use std::collections::BTreeMap;

use contracts::domain::a001_apartment::dto::DiscountSpec;
use leptos::prelude::*;

use crate::shared::number_format::format_limit;

/// Префикс id полей скидок в форме стандартной рассрочки
pub const STANDARD_PREFIX: &str = "disc-";
/// Префикс id полей скидок в форме рассрочки на ПВ
pub const DP_PREFIX: &str = "dp-disc-";

/// Одно поле ввода скидки вместе с его реактивным состоянием
#[derive(Clone)]
pub struct DiscountField {
    pub input_id: String,
    pub label: String,
    pub max_percent: f64,
    pub value: RwSignal<String>,
    pub invalid: RwSignal<bool>,
}

impl DiscountField {
    pub fn from_spec(spec: &DiscountSpec, prefix: &str) -> Self {
        Self {
            input_id: format!("{}{}", prefix, spec.code),
            label: spec.label.clone(),
            max_percent: spec.max_percent,
            value: RwSignal::new(String::new()),
            invalid: RwSignal::new(false),
        }
    }

    pub fn entry(&self) -> DiscountEntry {
        DiscountEntry {
            input_id: self.input_id.clone(),
            label: self.label.clone(),
            max_percent: self.max_percent,
            raw_value: self.value.get_untracked(),
        }
    }
}

/// Снимок одного поля для валидации
#[derive(Debug, Clone)]
pub struct DiscountEntry {
    pub input_id: String,
    pub label: String,
    pub max_percent: f64,
    pub raw_value: String,
}

/// Превышение потолка скидки
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountViolation {
    pub input_id: String,
    pub label: String,
    pub max_percent: f64,
}

impl DiscountViolation {
    pub fn message(&self) -> String {
        format!(
            "Скидка {} не может превышать {}%",
            self.label,
            format_limit(self.max_percent)
        )
    }
}

/// Собирает карту дополнительных скидок для запроса расчёта.
///
/// Пустые и нечисловые значения пропускаются. Значение выше потолка —
/// нарушение; возвращаются все нарушения сразу, отправка блокируется.
/// Нулевые значения в карту не попадают. Ключ — id поля без префикса
/// формы, значение — доля от единицы.
pub fn collect_discounts(
    entries: &[DiscountEntry],
    prefix: &str,
) -> Result<BTreeMap<String, f64>, Vec<DiscountViolation>> {
    let mut discounts = BTreeMap::new();
    let mut violations = Vec::new();

    for entry in entries {
        let Ok(value) = entry.raw_value.trim().parse::<f64>() else {
            continue;
        };
        if value > entry.max_percent {
            violations.push(DiscountViolation {
                input_id: entry.input_id.clone(),
                label: entry.label.clone(),
                max_percent: entry.max_percent,
            });
        } else if value > 0.0 {
            let key = entry
                .input_id
                .strip_prefix(prefix)
                .unwrap_or(&entry.input_id)
                .to_string();
            discounts.insert(key, value / 100.0);
        }
    }

    if violations.is_empty() {
        Ok(discounts)
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(input_id: &str, max_percent: f64, raw_value: &str) -> DiscountEntry {
        DiscountEntry {
            input_id: input_id.to_string(),
            label: input_id.to_string(),
            max_percent,
            raw_value: raw_value.to_string(),
        }
    }

    #[test]
    fn test_value_above_max_blocks_submission() {
        let entries = vec![entry("disc-mpp", 2.0, "3"), entry("disc-rop", 1.0, "0.5")];
        let violations = collect_discounts(&entries, STANDARD_PREFIX).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].input_id, "disc-mpp");
    }

    #[test]
    fn test_valid_value_is_keyed_by_stripped_id_as_fraction() {
        let entries = vec![entry("disc-mpp", 2.0, "1.5")];
        let discounts = collect_discounts(&entries, STANDARD_PREFIX).unwrap();
        assert_eq!(discounts.get("mpp"), Some(&0.015));
    }

    #[test]
    fn test_dp_prefix_is_stripped() {
        let entries = vec![entry("dp-disc-action", 5.0, "5")];
        let discounts = collect_discounts(&entries, DP_PREFIX).unwrap();
        assert_eq!(discounts.get("action"), Some(&0.05));
    }

    #[test]
    fn test_blank_and_zero_values_are_omitted() {
        let entries = vec![
            entry("disc-mpp", 2.0, ""),
            entry("disc-rop", 1.0, "0"),
            entry("disc-action", 5.0, "abc"),
        ];
        let discounts = collect_discounts(&entries, STANDARD_PREFIX).unwrap();
        assert!(discounts.is_empty());
    }

    #[test]
    fn test_value_at_max_is_accepted() {
        let entries = vec![entry("disc-mpp", 2.0, "2")];
        let discounts = collect_discounts(&entries, STANDARD_PREFIX).unwrap();
        assert_eq!(discounts.get("mpp"), Some(&0.02));
    }

    #[test]
    fn test_all_violations_are_reported() {
        let entries = vec![entry("disc-mpp", 2.0, "3"), entry("disc-rop", 1.0, "2")];
        let violations = collect_discounts(&entries, STANDARD_PREFIX).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_violation_message_names_label_and_limit() {
        let field = DiscountEntry {
            input_id: "disc-mpp".to_string(),
            label: "МПП".to_string(),
            max_percent: 2.5,
            raw_value: "4".to_string(),
        };
        let violations = collect_discounts(&[field], STANDARD_PREFIX).unwrap_err();
        assert_eq!(violations[0].message(), "Скидка МПП не может превышать 2.5%");
    }
}
