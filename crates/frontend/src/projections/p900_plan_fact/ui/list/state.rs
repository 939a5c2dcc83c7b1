use chrono::Datelike;
use contracts::enums::currency::Currency;
use contracts::projections::p900_plan_fact::dto::{PlanFactRow, PlanFactTotals};
use leptos::prelude::*;

use crate::shared::currency::load_saved_currency;

#[derive(Clone, Debug)]
pub struct PlanFactListState {
    pub rows: Vec<PlanFactRow>,
    pub totals: Option<PlanFactTotals>,
    pub usd_rate: Option<f64>,
    pub export_url: String,

    // Filters
    pub search_query: String,
    pub hide_zero_plan: bool,

    // Display currency
    pub currency: Currency,

    // Report period
    pub year: i32,
    pub month: u32,
    pub property_type: String,

    pub is_loaded: bool,
}

impl Default for PlanFactListState {
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            rows: Vec::new(),
            totals: None,
            usd_rate: None,
            export_url: String::new(),
            search_query: String::new(),
            hide_zero_plan: false,
            currency: Currency::default(),
            year: today.year(),
            month: today.month(),
            property_type: "apartment".to_string(),
            is_loaded: false,
        }
    }
}

/// Начальное состояние страницы: валюта восстанавливается из localStorage,
/// по умолчанию — базовая
pub fn create_state() -> RwSignal<PlanFactListState> {
    let mut state = PlanFactListState::default();
    if let Some(saved) = load_saved_currency() {
        state.currency = saved;
    }
    RwSignal::new(state)
}
