//! Выбор валюты отображения: хранение в localStorage, конвертация сумм,
//! разрешение активного элемента управления.

use contracts::enums::currency::Currency;
use web_sys::window;

use crate::shared::number_format::format_amount;

const CURRENCY_KEY: &str = "reportCurrency";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Прочитать сохранённую валюту; None, если ничего не сохранено
/// или сохранён неизвестный код
pub fn load_saved_currency() -> Option<Currency> {
    let raw = get_local_storage()?.get_item(CURRENCY_KEY).ok()??;
    Currency::from_code(&raw)
}

/// Сохранить выбор пользователя
pub fn save_currency(currency: Currency) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(CURRENCY_KEY, currency.code());
    }
}

/// Какой элемент управления валютой активен на странице
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySource {
    Dropdown,
    Toggle,
}

/// Выпадающий список имеет приоритет над старым переключателем.
/// Разрешается один раз при инициализации страницы.
pub fn resolve_currency_source(has_dropdown: bool, has_toggle: bool) -> Option<CurrencySource> {
    if has_dropdown {
        Some(CurrencySource::Dropdown)
    } else if has_toggle {
        Some(CurrencySource::Toggle)
    } else {
        None
    }
}

/// Отрисовать сумму в выбранной валюте. Без курса (или с нулевым курсом)
/// значение остаётся в базовой валюте.
pub fn display_amount(uzs_value: f64, currency: Currency, usd_rate: Option<f64>) -> String {
    match (currency, usd_rate) {
        (Currency::Usd, Some(rate)) if rate > 0.0 => {
            format!("{} {}", currency.symbol(), format_amount(uzs_value / rate))
        }
        _ => format_amount(uzs_value),
    }
}

/// Ссылка экспорта с выбранной валютой в query string
pub fn export_href(base_url: &str, currency: Currency) -> String {
    format!("{}?currency={}", base_url, currency.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_amount_base_currency() {
        assert_eq!(
            display_amount(12_345_678.0, Currency::Uzs, Some(12_650.0)),
            "12 345 678"
        );
    }

    #[test]
    fn test_display_amount_converted() {
        assert_eq!(
            display_amount(12_650_000.0, Currency::Usd, Some(12_650.0)),
            "$ 1 000"
        );
    }

    #[test]
    fn test_display_amount_without_rate_falls_back() {
        assert_eq!(display_amount(5_000.0, Currency::Usd, None), "5 000");
        assert_eq!(display_amount(5_000.0, Currency::Usd, Some(0.0)), "5 000");
    }

    #[test]
    fn test_dropdown_wins_over_toggle() {
        assert_eq!(
            resolve_currency_source(true, true),
            Some(CurrencySource::Dropdown)
        );
        assert_eq!(
            resolve_currency_source(false, true),
            Some(CurrencySource::Toggle)
        );
        assert_eq!(resolve_currency_source(false, false), None);
    }

    #[test]
    fn test_export_href() {
        assert_eq!(
            export_href("/reports/plan-fact/export", Currency::Usd),
            "/reports/plan-fact/export?currency=USD"
        );
        assert_eq!(
            export_href("/reports/plan-fact/export", Currency::Uzs),
            "/reports/plan-fact/export?currency=UZS"
        );
    }
}
