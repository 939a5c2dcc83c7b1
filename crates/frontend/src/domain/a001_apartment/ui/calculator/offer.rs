//! Открытие коммерческого предложения (КП) в новой вкладке

use contracts::enums::calc_type::CalcType;
use serde::Serialize;

#[derive(Serialize)]
struct OfferQuery {
    calc_type: &'static str,
    details: String,
}

/// URL страницы КП: путь с id объекта, в query string — тег калькулятора
/// и сохранённый результат расчёта, сериализованный в JSON
pub fn offer_url<T: Serialize>(
    sell_id: i64,
    calc_type: CalcType,
    details: &T,
) -> Result<String, String> {
    let details =
        serde_json::to_string(details).map_err(|e| format!("Failed to serialize details: {}", e))?;
    let query = serde_qs::to_string(&OfferQuery {
        calc_type: calc_type.tag(),
        details,
    })
    .map_err(|e| format!("Failed to build query string: {}", e))?;
    Ok(format!(
        "/reports/commercial-offer/complex/{}?{}",
        sell_id, query
    ))
}

/// Открывает КП в новой вкладке; без окна (вне браузера) молча выходит
pub fn open_offer(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("window.open failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offer_url_path_and_tag() {
        let details = json!({ "price_list": 1000.0 });
        let url = offer_url(4217, CalcType::StandardInstallment, &details).unwrap();
        assert!(url.starts_with("/reports/commercial-offer/complex/4217?"));
        assert!(url.contains("calc_type=standard_installment"));
    }

    #[test]
    fn test_details_are_url_encoded_json() {
        let details = json!({ "term_months": 6 });
        let url = offer_url(1, CalcType::DpInstallment, &details).unwrap();
        assert!(url.contains("calc_type=dp_installment"));
        // JSON в query string закодирован процентами
        assert!(url.contains("details=%7B%22term_months%22%3A6%7D"));
    }
}
