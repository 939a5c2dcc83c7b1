use leptos::prelude::*;

use crate::routes::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppRoutes />
    }
}
