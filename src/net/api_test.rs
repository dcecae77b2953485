use super::*;

// =============================================================
// Error mapping
// =============================================================

#[test]
fn backend_message_prefers_message_field() {
    let err = backend_message(401, r#"{"message":"Credenciais inválidas."}"#);
    assert_eq!(err, ApiError::Backend("Credenciais inválidas.".to_owned()));
}

#[test]
fn backend_message_falls_back_to_status() {
    assert_eq!(backend_message(500, "not json"), ApiError::Status(500));
    assert_eq!(backend_message(404, r#"{"error":"x"}"#), ApiError::Status(404));
    assert_eq!(backend_message(400, r#"{"message":"  "}"#), ApiError::Status(400));
}

#[test]
fn user_message_surfaces_backend_text_else_fallback() {
    let backend = ApiError::Backend("Chamado não encontrado.".to_owned());
    assert_eq!(
        backend.user_message("Falha ao carregar chamados."),
        "Chamado não encontrado."
    );

    let network = ApiError::Network("connection refused".to_owned());
    assert_eq!(
        network.user_message("Falha ao carregar chamados."),
        "Falha ao carregar chamados."
    );
    assert_eq!(
        ApiError::Status(502).user_message("Falha ao carregar chamados."),
        "Falha ao carregar chamados."
    );
}

// =============================================================
// URL configuration
// =============================================================

#[test]
fn host_root_strips_api_suffix() {
    assert_eq!(host_root("http://localhost:5001/api"), "http://localhost:5001");
    assert_eq!(host_root("https://helpdesk.example.com/api"), "https://helpdesk.example.com");
}

#[test]
fn host_root_leaves_other_urls_alone() {
    assert_eq!(host_root("http://localhost:5001"), "http://localhost:5001");
    assert_eq!(host_root("http://localhost:5001/v2"), "http://localhost:5001/v2");
}
