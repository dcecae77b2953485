//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, ticket_detail::TicketDetailPage,
    ticket_edit::EditTicketPage, ticket_new::NewTicketPage, tickets::TicketListPage,
};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session service (restore-or-empty from localStorage),
/// provides it via context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::init();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/helpdesk.css"/>
        <Title text="Fono com Amor - Chamados"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("chamados") view=TicketListPage/>
                <Route
                    path=(StaticSegment("chamados"), StaticSegment("novo"))
                    view=NewTicketPage
                />
                <Route
                    path=(StaticSegment("chamados"), ParamSegment("id"))
                    view=TicketDetailPage
                />
                <Route
                    path=(StaticSegment("chamados"), ParamSegment("id"), StaticSegment("editar"))
                    view=EditTicketPage
                />
            </Routes>
        </Router>
    }
}
