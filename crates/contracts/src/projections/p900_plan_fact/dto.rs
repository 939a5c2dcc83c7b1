use serde::{Deserialize, Serialize};

/// Строка отчёта план/факт по одному жилому комплексу.
/// Денежные поля — суммы в базовой валюте (UZS).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFactRow {
    pub complex_name: String,
    pub plan_units: i64,
    pub fact_units: i64,
    pub percent_fact_units: f64,
    pub plan_income: f64,
    pub fact_income: f64,
}

/// Итоги по всем комплексам
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanFactTotals {
    pub plan_units: i64,
    pub fact_units: i64,
    pub percent_fact_units: f64,
    pub plan_income: f64,
    pub fact_income: f64,
}

/// Ответ отчётного эндпоинта. Курс может отсутствовать: в этом случае
/// страница не предлагает конвертацию и показывает базовую валюту.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFactReport {
    pub rows: Vec<PlanFactRow>,
    pub totals: PlanFactTotals,
    #[serde(default)]
    pub usd_to_uzs_rate: Option<f64>,
    #[serde(default)]
    pub export_url: String,
}
