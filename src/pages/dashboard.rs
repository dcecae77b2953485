//! Managerial dashboard: KPI cards plus status/module/evolution charts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::charts::{BarChart, LineChart, PieChart};
use crate::components::kpi_card::KpiCard;
use crate::components::protected_route::ProtectedRoute;
use crate::state::dashboard::{
    chamados_por_status, distribuicao_por_modulo, evolucao_temporal, sample_kpis,
};
use crate::state::guard::ALL_ROLES;
use crate::state::session::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=ALL_ROLES.to_vec()>
            <Dashboard/>
        </ProtectedRoute>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1 class="page-header__title">"Dashboard Gerencial"</h1>
                <div class="page-header__actions">
                    <a href="/chamados" class="btn">"Lista de Chamados"</a>
                    <a href="/chamados/novo" class="btn btn--primary">"Abrir Novo Chamado"</a>
                    <span class="page-header__user">
                        {move || session.user().map(|u| u.name).unwrap_or_default()}
                    </span>
                    <button class="btn" on:click=on_logout>"Sair"</button>
                </div>
            </header>

            <section class="dashboard-page__kpis">
                {sample_kpis()
                    .into_iter()
                    .map(|kpi| view! { <KpiCard kpi=kpi/> })
                    .collect::<Vec<_>>()}
            </section>

            <section class="dashboard-page__charts">
                <div class="dashboard-page__panel">
                    <h3 class="dashboard-page__panel-title">"Chamados por Status"</h3>
                    <BarChart data=chamados_por_status()/>
                </div>
                <div class="dashboard-page__panel">
                    <h3 class="dashboard-page__panel-title">"Distribuição por Módulo"</h3>
                    <PieChart data=distribuicao_por_modulo()/>
                </div>
            </section>

            <section class="dashboard-page__charts dashboard-page__charts--wide">
                <div class="dashboard-page__panel">
                    <h3 class="dashboard-page__panel-title">"Evolução Temporal de Chamados"</h3>
                    <LineChart data=evolucao_temporal()/>
                </div>
            </section>
        </div>
    }
}
