//! REST calls against the ticket backend via `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls carrying the bearer token the
//! caller hands in. Server-side (SSR): stubs returning
//! `ApiError::Unavailable` since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are mapped through [`backend_message`], which keeps
//! the backend's `message` field when present so views can surface it
//! inline. Transport and decode failures become their own variants; the
//! view picks a generic fallback for those via [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Chamado, ChamadoUpdate, LoginResponse, NovoChamado};

/// Backend base URL: compile-time override with a hard-coded fallback.
pub fn base_url() -> &'static str {
    option_env!("HELPDESK_API_URL").unwrap_or("http://localhost:5001/api")
}

/// Host root for attachment links (`filePath` values are server-relative).
pub fn server_root() -> String {
    host_root(base_url()).to_owned()
}

fn host_root(base: &str) -> &str {
    base.strip_suffix("/api").unwrap_or(base)
}

/// Error produced by any API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the request and supplied a user-facing message.
    #[error("{0}")]
    Backend(String),
    /// Non-2xx response without a usable `message` field.
    #[error("requisição falhou com status {0}")]
    Status(u16),
    /// Transport-level failure (connection refused, CORS, ...).
    #[error("falha de rede: {0}")]
    Network(String),
    /// The response body did not decode as the expected type.
    #[error("resposta inválida do servidor: {0}")]
    Decode(String),
    /// Called outside the browser (SSR stub).
    #[error("indisponível fora do navegador")]
    Unavailable,
}

impl ApiError {
    /// The inline message a view should display: the backend's own
    /// message when present, otherwise the view's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend(msg) => msg.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Map a non-2xx response body to an [`ApiError`], preferring the
/// backend's `{"message": ...}` payload.
fn backend_message(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned));
    match message {
        Some(msg) if !msg.trim().is_empty() => ApiError::Backend(msg),
        _ => ApiError::Status(status),
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(backend_message(resp.status(), &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /auth/login` with plain credentials.
///
/// # Errors
///
/// Propagates the backend's rejection message, or a transport/decode error.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/login", base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// `GET /tickets`: the full ticket collection (no pagination).
///
/// # Errors
///
/// See [`login`].
pub async fn fetch_chamados(token: &str) -> Result<Vec<Chamado>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/tickets", base_url());
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /tickets/:id`: one ticket with description, attachments, history.
///
/// # Errors
///
/// See [`login`].
pub async fn fetch_chamado(token: &str, id: &str) -> Result<Chamado, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/tickets/{id}", base_url());
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// `POST /tickets`: create a ticket as multipart form data, with the
/// repeated `tags[]` and `anexos` fields the backend expects.
///
/// # Errors
///
/// See [`login`].
#[cfg(feature = "hydrate")]
pub async fn create_chamado(
    token: &str,
    novo: &NovoChamado,
    anexos: Option<&web_sys::FileList>,
) -> Result<Chamado, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("FormData indisponível".to_owned()))?;
    let _ = form.append_with_str("titulo", &novo.titulo);
    let _ = form.append_with_str("modulo", &novo.modulo);
    let _ = form.append_with_str("prioridade", novo.prioridade.as_str());
    let _ = form.append_with_str("descricao", &novo.descricao);
    let _ = form.append_with_str("solicitanteId", &novo.solicitante_id);
    for tag in &novo.tags {
        let _ = form.append_with_str("tags[]", tag);
    }
    if let Some(files) = anexos {
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                let _ = form.append_with_blob("anexos", &file);
            }
        }
    }

    let url = format!("{}/tickets", base_url());
    // No explicit Content-Type: the browser sets the multipart boundary.
    let resp = gloo_net::http::Request::post(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// SSR stub for [`create_chamado`]; file inputs do not exist server-side.
#[cfg(not(feature = "hydrate"))]
pub async fn create_chamado(token: &str, novo: &NovoChamado) -> Result<Chamado, ApiError> {
    let _ = (token, novo);
    Err(ApiError::Unavailable)
}

/// `PUT /tickets/:id`: update the editable fields of a ticket.
///
/// # Errors
///
/// See [`login`].
pub async fn update_chamado(
    token: &str,
    id: &str,
    update: &ChamadoUpdate,
) -> Result<Chamado, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/tickets/{id}", base_url());
        let resp = gloo_net::http::Request::put(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(update)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, update);
        Err(ApiError::Unavailable)
    }
}

/// `POST /tickets/:id/comment`: append a comment; the backend returns
/// the updated ticket, which replaces local state wholesale.
///
/// # Errors
///
/// See [`login`].
pub async fn add_comentario(
    token: &str,
    id: &str,
    comentario: &str,
    publico: bool,
) -> Result<Chamado, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/tickets/{id}/comment", base_url());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(&serde_json::json!({ "comentario": comentario, "publico": publico }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, comentario, publico);
        Err(ApiError::Unavailable)
    }
}
