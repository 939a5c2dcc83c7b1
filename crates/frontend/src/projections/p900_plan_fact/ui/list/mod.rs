mod state;

use contracts::enums::currency::Currency;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::projections::p900_plan_fact::api;
use crate::projections::p900_plan_fact::filter::row_matches;
use crate::shared::currency::{
    display_amount, export_href, resolve_currency_source, save_currency, CurrencySource,
};
use crate::shared::number_format::format_percent;
use state::create_state;

/// Страница отчёта план/факт: переключение валюты отображения
/// и фильтрация строк по имени комплекса и нулевому плану
#[component]
pub fn PlanFactReportPage() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    // Активный элемент управления валютой разрешается один раз:
    // выпадающий список приоритетнее старого чекбокса-переключателя
    let currency_source = resolve_currency_source(true, false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let (year, month, property_type) =
            state.with_untracked(|s| (s.year, s.month, s.property_type.clone()));
        spawn_local(async move {
            match api::fetch_plan_fact(year, month, &property_type).await {
                Ok(report) => {
                    state.update(|s| {
                        s.rows = report.rows;
                        s.totals = Some(report.totals);
                        s.usd_rate = report.usd_to_uzs_rate;
                        s.export_url = report.export_url;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("plan-fact report load failed: {}", e);
                    set_error.set(Some(
                        "Не удалось загрузить отчёт. Попробуйте позже.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    // Смена валюты: обновить состояние и сохранить выбор
    let set_display_currency = move |currency: Currency| {
        state.update(|s| s.currency = currency);
        save_currency(currency);
    };

    let visible_rows = Signal::derive(move || {
        state.with(|s| {
            s.rows
                .iter()
                .filter(|row| {
                    row_matches(&row.complex_name, row.plan_units, &s.search_query, s.hide_zero_plan)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let money = move |uzs_value: f64| {
        state.with(|s| display_amount(uzs_value, s.currency, s.usd_rate))
    };
    let currency_code = move || state.with(|s| s.currency.code());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Отчёт план/факт"</h1>
                    <Badge>
                        {move || visible_rows.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    {move || state.with(|s| {
                        (!s.export_url.is_empty()).then(|| {
                            let href = export_href(&s.export_url, s.currency);
                            view! {
                                <a id="export-link" class="btn btn--secondary" href=href target="_blank">
                                    "Экспорт в Excel"
                                </a>
                            }
                        })
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <label for="searchInput">"Поиск по комплексу"</label>
                                <input
                                    type="text"
                                    id="searchInput"
                                    placeholder="Название комплекса..."
                                    prop:value=move || state.with(|s| s.search_query.clone())
                                    on:input=move |ev| {
                                        state.update(|s| s.search_query = event_target_value(&ev));
                                    }
                                />
                            </div>

                            <label class="filter-panel__toggle">
                                <input
                                    type="checkbox"
                                    id="hideZeroPlanToggle"
                                    prop:checked=move || state.with(|s| s.hide_zero_plan)
                                    on:change=move |ev| {
                                        state.update(|s| s.hide_zero_plan = event_target_checked(&ev));
                                    }
                                />
                                <span>"Скрыть нулевой план"</span>
                            </label>

                            {match currency_source {
                                Some(CurrencySource::Dropdown) => view! {
                                    <select
                                        id="currency"
                                        prop:value=move || currency_code().to_string()
                                        on:change=move |ev| {
                                            let currency = Currency::from_code(&event_target_value(&ev))
                                                .unwrap_or_default();
                                            set_display_currency(currency);
                                        }
                                    >
                                        {Currency::all().into_iter().map(|c| view! {
                                            <option value=c.code()>{c.code()}</option>
                                        }).collect_view()}
                                    </select>
                                }.into_any(),
                                Some(CurrencySource::Toggle) => view! {
                                    <label class="filter-panel__toggle">
                                        <input
                                            type="checkbox"
                                            id="currencyToggle"
                                            prop:checked=move || state.with(|s| s.currency == Currency::Usd)
                                            on:change=move |ev| {
                                                let currency = if event_target_checked(&ev) {
                                                    Currency::Usd
                                                } else {
                                                    Currency::Uzs
                                                };
                                                set_display_currency(currency);
                                            }
                                        />
                                        <span>"USD"</span>
                                    </label>
                                }.into_any(),
                                None => view! { <></> }.into_any(),
                            }}

                            <span>"Валюта: "<span id="currencyLabel">{currency_code}</span></span>
                        </Flex>
                    </div>
                </div>

                <div class="report-rows">
                    <For
                        each=move || visible_rows.get()
                        key=|row| row.complex_name.clone()
                        children=move |row| {
                            let plan_units = row.plan_units;
                            let fact_units = row.fact_units;
                            let percent_fact_units = row.percent_fact_units;
                            let plan_income = row.plan_income;
                            let fact_income = row.fact_income;
                            view! {
                                <div class="report-row" data-plan-units=plan_units.to_string()>
                                    <div class="report-row-title">
                                        <a href="#">{row.complex_name.clone()}</a>
                                    </div>
                                    <div class="report-row-metrics">
                                        <span>"План, шт: " {plan_units}</span>
                                        <span>"Факт, шт: " {fact_units}</span>
                                        <span>"Выполнение: " {format_percent(percent_fact_units)} " %"</span>
                                        <span>
                                            "План, сумма ("
                                            <span class="table-currency-label">{currency_code}</span>
                                            "): "
                                            <span
                                                class="currency-value"
                                                data-uzs-value=plan_income.to_string()
                                            >
                                                {move || money(plan_income)}
                                            </span>
                                        </span>
                                        <span>
                                            "Факт, сумма ("
                                            <span class="table-currency-label">{currency_code}</span>
                                            "): "
                                            <span
                                                class="currency-value"
                                                data-uzs-value=fact_income.to_string()
                                            >
                                                {move || money(fact_income)}
                                            </span>
                                        </span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                {move || state.with(|s| s.totals.clone()).map(|totals| {
                    let plan_income = totals.plan_income;
                    let fact_income = totals.fact_income;
                    view! {
                        <div class="report-totals">
                            <span>"Итого план, шт: " {totals.plan_units}</span>
                            <span>"Итого факт, шт: " {totals.fact_units}</span>
                            <span>"Выполнение: " {format_percent(totals.percent_fact_units)} " %"</span>
                            <span>
                                "План, сумма: "
                                <span class="currency-value" data-uzs-value=plan_income.to_string()>
                                    {move || money(plan_income)}
                                </span>
                            </span>
                            <span>
                                "Факт, сумма: "
                                <span class="currency-value" data-uzs-value=fact_income.to_string()>
                                    {move || money(fact_income)}
                                </span>
                            </span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
