//! Предикаты фильтрации строк отчёта

/// Строка видна, когда имя комплекса содержит поисковый запрос
/// (без учёта регистра) и, при включённом скрытии нулевого плана,
/// план в штуках больше нуля. Оба предиката независимы.
pub fn row_matches(complex_name: &str, plan_units: i64, query: &str, hide_zero_plan: bool) -> bool {
    let search_match = complex_name
        .to_lowercase()
        .contains(&query.to_lowercase());
    let plan_match = !hide_zero_plan || plan_units > 0;
    search_match && plan_match
}
