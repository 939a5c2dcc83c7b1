use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_apartment::ui::calculator::ApartmentCalcPage;
use crate::projections::p900_plan_fact::ui::list::PlanFactReportPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PlanFactReportPage />
                <Route path=path!("/reports/plan-fact") view=PlanFactReportPage />
                <Route path=path!("/apartment/:id") view=ApartmentCalcPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Страница не найдена"</h1>
        </div>
    }
}
