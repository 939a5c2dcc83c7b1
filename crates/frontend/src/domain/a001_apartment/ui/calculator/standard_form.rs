use chrono::Local;
use contracts::domain::a001_apartment::dto::{
    ApartmentCard, InstallmentQuoteRequest, StandardInstallmentData,
};
use contracts::enums::calc_type::CalcType;
use contracts::enums::down_payment::DownPaymentKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::discounts::{collect_discounts, DiscountField, STANDARD_PREFIX};
use super::{offer, parse_start_date};
use crate::domain::a001_apartment::api;
use crate::shared::number_format::{format_amount, format_percent};

/// Калькулятор стандартной рассрочки
#[component]
pub fn StandardInstallmentForm(card: ApartmentCard) -> impl IntoView {
    let sell_id = card.sell_id;
    let fields: Vec<DiscountField> = card
        .standard_discounts
        .iter()
        .map(|spec| DiscountField::from_spec(spec, STANDARD_PREFIX))
        .collect();

    let term = RwSignal::new(String::from("12"));
    let start_date = RwSignal::new(Local::now().date_naive().format("%Y-%m-%d").to_string());
    let dp_amount = RwSignal::new(String::new());
    let dp_type = RwSignal::new(String::from("uzs"));

    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);
    let (submitted, set_submitted) = signal(false);
    // Однослотовый результат для печати КП; отображаемые значения живут
    // отдельно и не сбрасываются при проваленной валидации
    let stored: RwSignal<Option<StandardInstallmentData>> = RwSignal::new(None);
    let shown: RwSignal<Option<StandardInstallmentData>> = RwSignal::new(None);

    let fields_for_submit = fields.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Каждая попытка расчёта сбрасывает сохранённый результат
        // и прячет кнопку печати, ещё до валидации
        stored.set(None);

        for field in &fields_for_submit {
            field.invalid.set(false);
        }
        let entries: Vec<_> = fields_for_submit.iter().map(|f| f.entry()).collect();
        let additional_discounts = match collect_discounts(&entries, STANDARD_PREFIX) {
            Ok(discounts) => discounts,
            Err(violations) => {
                for violation in &violations {
                    if let Some(field) = fields_for_submit
                        .iter()
                        .find(|f| f.input_id == violation.input_id)
                    {
                        field.invalid.set(true);
                    }
                }
                if let Some(last) = violations.last() {
                    set_error.set(Some(last.message()));
                }
                return;
            }
        };

        set_error.set(None);
        shown.set(None);
        set_submitted.set(true);
        set_pending.set(true);

        let request = InstallmentQuoteRequest {
            sell_id,
            term: term.get_untracked().trim().parse().unwrap_or(0),
            start_date: parse_start_date(&start_date.get_untracked()),
            dp_amount: dp_amount.get_untracked().trim().parse().unwrap_or(0.0),
            dp_type: DownPaymentKind::from_code(&dp_type.get_untracked()).unwrap_or_default(),
            additional_discounts,
        };

        spawn_local(async move {
            match api::calculate_installment(&request).await {
                Ok(envelope) => {
                    if envelope.success {
                        stored.set(envelope.data.clone());
                        shown.set(envelope.data);
                    } else {
                        set_error.set(Some(envelope.error.unwrap_or_else(|| {
                            "Неизвестная ошибка расчёта.".to_string()
                        })));
                    }
                }
                Err(e) => {
                    log::error!("installment request failed: {}", e);
                    set_error.set(Some("Ошибка сети. Попробуйте позже.".to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    let res_text = move |field: fn(&StandardInstallmentData) -> String| {
        move || match shown.get() {
            Some(data) => field(&data),
            None if submitted.get() => "...".to_string(),
            None => "—".to_string(),
        }
    };

    let on_print = move |_| {
        if let Some(data) = stored.get_untracked() {
            match offer::offer_url(sell_id, CalcType::StandardInstallment, &data) {
                Ok(url) => offer::open_offer(&url),
                Err(e) => log::error!("offer url failed: {}", e),
            }
        }
    };

    view! {
        <div class="card calculator-card">
            <h2 class="card__title">"Стандартная рассрочка"</h2>

            <form id="installment-form" on:submit=on_submit>
                <div class="form__group">
                    <label for="term">"Срок рассрочки (мес.)"</label>
                    <input
                        type="number"
                        id="term"
                        min="1"
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label for="first_payment_date">"Дата первого платежа"</label>
                    <input
                        type="date"
                        id="first_payment_date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label for="dp-amount-standard">"Первоначальный взнос"</label>
                    <input
                        type="number"
                        id="dp-amount-standard"
                        min="0"
                        prop:value=move || dp_amount.get()
                        on:input=move |ev| dp_amount.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label for="dp-type-standard">"Тип взноса"</label>
                    <select
                        id="dp-type-standard"
                        on:change=move |ev| dp_type.set(event_target_value(&ev))
                    >
                        <option value="uzs">"UZS"</option>
                        <option value="usd">"USD"</option>
                        <option value="percent">"%"</option>
                    </select>
                </div>

                {fields.iter().map(|field| {
                    let input_id = field.input_id.clone();
                    let label = field.label.clone();
                    let max_percent = field.max_percent;
                    let value = field.value;
                    let invalid = field.invalid;
                    view! {
                        <div class="form__group">
                            <label for=input_id.clone()>{label}</label>
                            <input
                                type="number"
                                class="discount-input"
                                class:is-invalid=move || invalid.get()
                                id=input_id
                                step="0.1"
                                min="0"
                                max=max_percent.to_string()
                                prop:value=move || value.get()
                                on:input=move |ev| value.set(event_target_value(&ev))
                            />
                        </div>
                    }
                }).collect_view()}

                {move || error.get().map(|e| view! {
                    <div id="error-display" class="alert alert--error">{e}</div>
                })}

                <button type="submit" class="btn btn--primary">
                    {move || if pending.get() { "Расчёт..." } else { "Рассчитать" }}
                </button>
            </form>

            <div class="calc-results">
                <div class="calc-results__row">
                    <span>"Цена по прайсу:"</span>
                    <span id="res-price-list">
                        {res_text(|d| format!("{} UZS", format_amount(d.price_list)))}
                    </span>
                </div>
                <div class="calc-results__row">
                    <span>"Скидка:"</span>
                    <span id="res-discount">
                        {res_text(|d| format!("{} %", format_percent(d.calculated_discount)))}
                    </span>
                </div>
                <div class="calc-results__row">
                    <span>"Стоимость по договору:"</span>
                    <span id="res-contract-value">
                        {res_text(|d| format!("{} UZS", format_amount(d.calculated_contract_value)))}
                    </span>
                </div>
                <div class="calc-results__row">
                    <span>"Ежемесячный платёж:"</span>
                    <span id="res-monthly-payment">
                        {res_text(|d| format!("{} UZS", format_amount(d.monthly_payment)))}
                    </span>
                </div>
            </div>

            {move || stored.get().map(|_| view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    attr:id="print-kp-installment"
                    on_click=on_print
                >
                    "Печать КП"
                </Button>
            })}
        </div>
    }
}
