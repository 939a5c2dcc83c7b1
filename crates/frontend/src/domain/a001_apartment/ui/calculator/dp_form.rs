use contracts::domain::a001_apartment::dto::{
    ApartmentCard, DpInstallmentData, InstallmentQuoteRequest,
};
use contracts::enums::calc_type::CalcType;
use contracts::enums::down_payment::DownPaymentKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::discounts::{collect_discounts, DiscountField, DP_PREFIX};
use super::{offer, parse_start_date};
use crate::domain::a001_apartment::api;
use crate::shared::number_format::format_amount;

/// Калькулятор рассрочки на первоначальный взнос
#[component]
pub fn DpInstallmentForm(card: ApartmentCard) -> impl IntoView {
    let sell_id = card.sell_id;
    let max_term = card.dp_installment_max_term;
    let fields: Vec<DiscountField> = card
        .dp_discounts
        .iter()
        .map(|spec| DiscountField::from_spec(spec, DP_PREFIX))
        .collect();

    let term = RwSignal::new(String::from("6"));
    let start_date = RwSignal::new(
        chrono::Local::now()
            .date_naive()
            .format("%Y-%m-%d")
            .to_string(),
    );
    let dp_amount = RwSignal::new(String::new());
    let dp_type = RwSignal::new(String::from("percent"));

    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);
    let (submitted, set_submitted) = signal(false);
    // Однослотовый результат для печати КП; отображаемые значения живут
    // отдельно и не сбрасываются при проваленной валидации
    let stored: RwSignal<Option<DpInstallmentData>> = RwSignal::new(None);
    let shown: RwSignal<Option<DpInstallmentData>> = RwSignal::new(None);

    let fields_for_submit = fields.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        stored.set(None);

        for field in &fields_for_submit {
            field.invalid.set(false);
        }
        let entries: Vec<_> = fields_for_submit.iter().map(|f| f.entry()).collect();
        let additional_discounts = match collect_discounts(&entries, DP_PREFIX) {
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
            match api::calculate_dp_installment(&request).await {
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
                    log::error!("dp installment request failed: {}", e);
                    set_error.set(Some("Ошибка сети. Попробуйте позже.".to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    let res_text = move |field: fn(&DpInstallmentData) -> String| {
        move || match shown.get() {
            Some(data) => field(&data),
            None if submitted.get() => "...".to_string(),
            None => "—".to_string(),
        }
    };

    let on_print = move |_| {
        if let Some(data) = stored.get_untracked() {
            match offer::offer_url(sell_id, CalcType::DpInstallment, &data) {
                Ok(url) => offer::open_offer(&url),
                Err(e) => log::error!("offer url failed: {}", e),
            }
        }
    };

    view! {
        <div class="card calculator-card">
            <h2 class="card__title">"Рассрочка на ПВ"</h2>

            <form id="dp-installment-form" on:submit=on_submit>
                <div class="form__group">
                    <label for="dp-term">"Срок рассрочки на ПВ (мес.)"</label>
                    <input
                        type="number"
                        id="dp-term"
                        min="1"
                        max=max_term.to_string()
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label for="dp_first_payment_date">"Дата первого платежа"</label>
                    <input
                        type="date"
                        id="dp_first_payment_date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label for="dp-amount">"Первоначальный взнос"</label>
                    <input
                        type="number"
                        id="dp-amount"
                        min="0"
                        prop:value=move || dp_amount.get()
                        on:input=move |ev| dp_amount.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label for="dp-type">"Тип взноса"</label>
                    <select
                        id="dp-type"
                        on:change=move |ev| dp_type.set(event_target_value(&ev))
                    >
                        <option value="percent">"%"</option>
                        <option value="uzs">"UZS"</option>
                        <option value="usd">"USD"</option>
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
                                class="discount-input-dp"
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
                    <div id="dp-error-display" class="alert alert--error">{e}</div>
                })}

                <button type="submit" class="btn btn--primary">
                    {move || if pending.get() { "Расчёт..." } else { "Рассчитать" }}
                </button>
            </form>

            <div class="calc-results">
                <div class="calc-results__row">
                    <span>"Срок:"</span>
                    <span id="dp-res-term">
                        {res_text(|d| format!("{} мес.", d.term_months))}
                    </span>
                </div>
                <div class="calc-results__row">
                    <span>"Ежемесячный платёж по ПВ:"</span>
                    <span id="dp-res-monthly">
                        {res_text(|d| format!("{} UZS", format_amount(d.monthly_payment_for_dp)))}
                    </span>
                </div>
                <div class="calc-results__row">
                    <span>"Тело ипотеки:"</span>
                    <span id="dp-res-mortgage">
                        {res_text(|d| format!("{} UZS", format_amount(d.mortgage_body)))}
                    </span>
                </div>
                <div class="calc-results__row">
                    <span>"Стоимость по договору:"</span>
                    <span id="dp-res-contract">
                        {res_text(|d| format!("{} UZS", format_amount(d.calculated_contract_value)))}
                    </span>
                </div>
            </div>

            {move || stored.get().map(|_| view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    attr:id="print-kp-dp-installment"
                    on_click=on_print
                >
                    "Печать КП"
                </Button>
            })}
        </div>
    }
}
