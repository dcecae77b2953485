//! Route authorization as an explicit check.
//!
//! [`authorize`] maps a session plus an optional role allow-list to a
//! tagged result; the presentation layer (`ProtectedRoute`) maps each
//! tag to an action. Keeping the decision pure removes the
//! redirect-during-render race and makes the policy testable natively.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::AccessLevel;
use crate::state::session::Session;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Allow-list used by views open to every authenticated role.
pub const ALL_ROLES: &[AccessLevel] = &[
    AccessLevel::Administrador,
    AccessLevel::Gestor,
    AccessLevel::Operador,
];

/// Outcome of an authorization check for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthCheck {
    /// Session restoration has not resolved; block rendering.
    Pending,
    /// Render the protected children.
    Authorized,
    /// Navigate to the given route instead of rendering children.
    RedirectTo(&'static str),
}

/// Decide whether a protected view may render.
///
/// Unauthenticated sessions go to the login screen; authenticated users
/// whose role is outside a non-empty allow-list go back to the
/// dashboard. An absent or empty allow-list admits any authenticated
/// user.
pub fn authorize(session: &Session, allowed_roles: Option<&[AccessLevel]>) -> AuthCheck {
    if session.loading {
        return AuthCheck::Pending;
    }
    let (Some(user), Some(_token)) = (&session.user, &session.token) else {
        return AuthCheck::RedirectTo(LOGIN_ROUTE);
    };
    if let Some(roles) = allowed_roles {
        if !roles.is_empty() && !roles.contains(&user.access_level) {
            return AuthCheck::RedirectTo(DASHBOARD_ROUTE);
        }
    }
    AuthCheck::Authorized
}
