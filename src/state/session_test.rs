use super::*;
use crate::net::types::AccessLevel;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Maria".to_owned(),
        email: "maria@example.com".to_owned(),
        access_level: AccessLevel::Operador,
    }
}

// =============================================================
// Session defaults and transitions
// =============================================================

#[test]
fn default_session_is_pending_and_unauthenticated() {
    let s = Session::default();
    assert!(s.loading);
    assert!(s.user.is_none());
    assert!(s.token.is_none());
    assert!(!s.is_authenticated());
}

#[test]
fn apply_login_sets_user_and_token_together() {
    let mut s = Session::default();
    s.apply_login(user(), "jwt".to_owned());
    assert!(s.is_authenticated());
    assert_eq!(s.user.as_ref().unwrap().id, "u-1");
    assert_eq!(s.token.as_deref(), Some("jwt"));
}

#[test]
fn clear_drops_user_and_token_together() {
    let mut s = Session::default();
    s.apply_login(user(), "jwt".to_owned());
    s.clear();
    assert!(s.user.is_none());
    assert!(s.token.is_none());
    assert!(!s.is_authenticated());
}

#[test]
fn clear_is_idempotent_from_any_state() {
    let mut s = Session::default();
    s.clear();
    assert!(!s.is_authenticated());
    s.clear();
    assert!(!s.is_authenticated());
}

#[test]
fn failed_login_leaves_prior_session_untouched() {
    let mut s = Session::default();
    s.apply_login(user(), "jwt".to_owned());
    s.loading = false;
    let before = s.clone();

    let result = s.resolve_login(Err(ApiError::Backend(
        "Credenciais inválidas.".to_owned(),
    )));

    assert!(result.is_err());
    assert_eq!(s, before);
    assert!(s.is_authenticated());
}

#[test]
fn successful_login_replaces_the_pair() {
    let mut s = Session::default();
    s.apply_login(user(), "old-jwt".to_owned());

    let other = User {
        id: "u-2".to_owned(),
        ..user()
    };
    let result = s.resolve_login(Ok(LoginResponse {
        token: "new-jwt".to_owned(),
        user: other,
    }));

    assert_eq!(result, Ok(()));
    assert_eq!(s.token.as_deref(), Some("new-jwt"));
    assert_eq!(s.user.as_ref().unwrap().id, "u-2");
}

#[test]
fn token_alone_is_not_authenticated() {
    // The pair invariant: a half-set session never counts as logged in.
    let s = Session {
        user: None,
        token: Some("jwt".to_owned()),
        loading: false,
    };
    assert!(!s.is_authenticated());

    let s = Session {
        user: Some(user()),
        token: None,
        loading: false,
    };
    assert!(!s.is_authenticated());
}
