//! Durable session persistence in `localStorage`.
//!
//! Two keys hold the bearer token and the serialized user; they are
//! always written and cleared together so a restored session is never
//! half-populated. Any read failure (missing key, corrupt JSON, storage
//! denied) degrades to "no session". Requires a browser environment;
//! outside `hydrate` every operation is a no-op.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "helpdesk_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "helpdesk_user";

/// Restore `{token, user}` if both keys are present and decode cleanly.
pub fn read_session() -> Option<(String, User)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let raw_user = storage.get_item(USER_KEY).ok()??;
        let user = serde_json::from_str::<User>(&raw_user).ok()?;
        Some((token, user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both session keys together.
pub fn write_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(raw_user) = serde_json::to_string(user) else {
            log::warn!("sessão não persistida: usuário não serializável");
            return;
        };
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(USER_KEY, &raw_user);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove both session keys together.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
