use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::down_payment::DownPaymentKind;

/// Описание одного поля дополнительной скидки: код, подпись и потолок
/// в процентах, заданный сервером.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountSpec {
    pub code: String,
    pub label: String,
    pub max_percent: f64,
}

/// Карточка объекта, по которой строятся оба калькулятора
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApartmentCard {
    pub sell_id: i64,
    pub complex_name: String,
    pub apartment_number: Option<String>,
    pub estate_price: f64,
    pub standard_discounts: Vec<DiscountSpec>,
    pub dp_discounts: Vec<DiscountSpec>,
    pub dp_installment_max_term: u32,
}

/// Запрос к расчётному эндпоинту. Значения скидок — доли от единицы,
/// ключи — коды скидок без префикса поля формы.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentQuoteRequest {
    pub sell_id: i64,
    pub term: u32,
    pub start_date: NaiveDate,
    pub dp_amount: f64,
    pub dp_type: DownPaymentKind,
    pub additional_discounts: BTreeMap<String, f64>,
}

/// Конверт ответа расчётного эндпоинта: исход определяется флагом `success`,
/// а не HTTP-статусом.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct CalcResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    InitialPayment,
    MonthlyPayment,
    DpPayment,
    MortgageBody,
}

/// Один платёж графика
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub month_number: u32,
    pub payment_date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
}

/// Результат стандартной рассрочки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardInstallmentData {
    pub price_list: f64,
    pub initial_payment_uzs: f64,
    pub calculated_discount: f64,
    pub calculated_contract_value: f64,
    pub monthly_payment: f64,
    #[serde(default)]
    pub payment_schedule: Vec<ScheduledPayment>,
}

/// Результат рассрочки на первоначальный взнос
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DpInstallmentData {
    pub term_months: u32,
    pub monthly_payment_for_dp: f64,
    pub mortgage_body: f64,
    pub calculated_contract_value: f64,
    pub calculated_discount: f64,
    #[serde(default)]
    pub payment_schedule: Vec<ScheduledPayment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_field_names() {
        let request = InstallmentQuoteRequest {
            sell_id: 4217,
            term: 12,
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            dp_amount: 5000.0,
            dp_type: DownPaymentKind::Usd,
            additional_discounts: BTreeMap::from([("mpp".to_string(), 0.02)]),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "sell_id": 4217,
                "term": 12,
                "start_date": "2025-09-01",
                "dp_amount": 5000.0,
                "dp_type": "usd",
                "additional_discounts": { "mpp": 0.02 }
            })
        );
    }

    #[test]
    fn test_success_envelope() {
        let raw = json!({
            "success": true,
            "data": {
                "price_list": 123_456_789.0,
                "initial_payment_uzs": 20_000_000.0,
                "calculated_discount": 7.0,
                "calculated_contract_value": 112_000_000.0,
                "monthly_payment": 7_666_666.0
            }
        });

        let envelope: CalcResponse<StandardInstallmentData> =
            serde_json::from_value(raw).unwrap();
        assert!(envelope.success);
        assert!(envelope.error.is_none());
        let data = envelope.data.unwrap();
        assert_eq!(data.price_list, 123_456_789.0);
        assert!(data.payment_schedule.is_empty());
    }

    #[test]
    fn test_error_envelope_without_data() {
        let raw = json!({ "success": false, "error": "Срок рассрочки должен быть больше нуля." });
        let envelope: CalcResponse<DpInstallmentData> = serde_json::from_value(raw).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(
            envelope.error.as_deref(),
            Some("Срок рассрочки должен быть больше нуля.")
        );
    }

    #[test]
    fn test_schedule_kind_wire_name() {
        let raw = json!({
            "month_number": 0,
            "payment_date": "2025-09-01",
            "amount": 15_000_000.0,
            "type": "initial_payment"
        });
        let payment: ScheduledPayment = serde_json::from_value(raw).unwrap();
        assert_eq!(payment.kind, PaymentKind::InitialPayment);
    }

    #[test]
    fn test_dp_result_fields() {
        let raw = json!({
            "term_months": 6,
            "monthly_payment_for_dp": 5_000_000.0,
            "mortgage_body": 400_000_000.0,
            "calculated_contract_value": 430_000_000.0,
            "calculated_discount": 5.0,
            "payment_schedule": [
                { "month_number": 1, "payment_date": "2025-10-01", "amount": 5_000_000.0, "type": "dp_payment" },
                { "month_number": 7, "payment_date": "2026-04-01", "amount": 400_000_000.0, "type": "mortgage_body" }
            ]
        });
        let data: DpInstallmentData = serde_json::from_value(raw).unwrap();
        assert_eq!(data.term_months, 6);
        assert_eq!(data.payment_schedule.len(), 2);
        assert_eq!(data.payment_schedule[1].kind, PaymentKind::MortgageBody);
    }
}
