//! KPI card for the dashboard header row.

use leptos::prelude::*;

use crate::state::dashboard::Kpi;

#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    view! {
        <div class=format!("kpi-card {}", kpi.color)>
            <h2 class="kpi-card__title">{kpi.title}</h2>
            <p class="kpi-card__value">{kpi.value}</p>
            {kpi.change.map(|change| view! { <p class="kpi-card__change">{change}</p> })}
        </div>
    }
}
