pub mod discounts;
mod dp_form;
pub mod offer;
mod standard_form;

pub use dp_form::DpInstallmentForm;
pub use standard_form::StandardInstallmentForm;

use chrono::Local;
use contracts::domain::a001_apartment::dto::ApartmentCard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::a001_apartment::api;

// Невалидная или пустая дата из поля формы заменяется сегодняшней
pub(super) fn parse_start_date(raw: &str) -> chrono::NaiveDate {
    raw.parse().unwrap_or_else(|_| Local::now().date_naive())
}

/// Страница объекта с двумя калькуляторами рассрочки
#[component]
pub fn ApartmentCalcPage() -> impl IntoView {
    let params = use_params_map();

    let card: RwSignal<Option<ApartmentCard>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let sell_id = params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok());
        let Some(sell_id) = sell_id else {
            set_error.set(Some("Не удалось найти ID объекта на странице.".to_string()));
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_apartment_card(sell_id).await {
                Ok(data) => {
                    card.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("apartment card load failed: {}", e);
                    set_error.set(Some(
                        "Не удалось загрузить данные объекта. Попробуйте позже.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page page--detail">
            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            {move || loading.get().then(|| view! {
                <div class="page__loading">"Загрузка..."</div>
            })}

            {move || card.get().map(|c| {
                let title = match &c.apartment_number {
                    Some(number) => {
                        format!("{}, кв. {} — ID: {}", c.complex_name, number, c.sell_id)
                    }
                    None => format!("{} — ID: {}", c.complex_name, c.sell_id),
                };
                view! {
                    <div>
                        <div class="page__header">
                            <h1 class="page__title">{title}</h1>
                        </div>
                        <div class="page__content calculators">
                            <StandardInstallmentForm card=c.clone() />
                            <DpInstallmentForm card=c />
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
