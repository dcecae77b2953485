//! Wrapper enforcing authentication and optional role-based access
//! before rendering protected content.
//!
//! The authorization decision itself lives in [`crate::state::guard`];
//! this component only maps each [`AuthCheck`] tag to presentation.
//! Navigation runs from a reactive effect keyed on the check, never
//! from the render path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::AccessLevel;
use crate::state::guard::{AuthCheck, DASHBOARD_ROUTE, authorize};
use crate::state::session::SessionStore;

/// Blocks children while the session resolves, redirects unauthenticated
/// users to the login screen, and sends users whose role is outside the
/// allow-list back to the dashboard (showing a local "access denied"
/// placeholder during the redirect window).
#[component]
pub fn ProtectedRoute(
    /// Roles allowed to view the children; absent or empty admits any
    /// authenticated user.
    #[prop(optional)]
    allowed_roles: Option<Vec<AccessLevel>>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let roles = StoredValue::new(allowed_roles);
    let check = Memo::new(move |_| roles.with_value(|r| authorize(&session.get(), r.as_deref())));

    let navigate = use_navigate();
    Effect::new(move || {
        if let AuthCheck::RedirectTo(target) = check.get() {
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        {move || match check.get() {
            AuthCheck::Pending => view! {
                <div class="route-guard route-guard--pending">
                    <p>"Carregando..."</p>
                </div>
            }
                .into_any(),
            AuthCheck::RedirectTo(target) if target == DASHBOARD_ROUTE => view! {
                <div class="route-guard route-guard--denied">
                    <p>"Acesso Negado. Você não tem permissão para ver esta página."</p>
                </div>
            }
                .into_any(),
            AuthCheck::RedirectTo(_) => ().into_any(),
            AuthCheck::Authorized => children().into_any(),
        }}
    }
}
