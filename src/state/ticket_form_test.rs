use super::*;

fn filled_draft() -> ChamadoDraft {
    ChamadoDraft {
        titulo: "Erro ao salvar cliente".to_owned(),
        modulo: "Sistema".to_owned(),
        prioridade: Prioridade::Alta,
        descricao: "Detalhes do problema.".to_owned(),
        tags: "a, b , c".to_owned(),
    }
}

fn chamado() -> Chamado {
    serde_json::from_value(serde_json::json!({
        "_id": "abc",
        "sequentialId": 7,
        "titulo": "Erro ao salvar",
        "prioridade": "Baixa",
        "modulo": "Financeiro",
        "status": "Iniciado",
        "descricao": "d",
        "tags": ["a", "b"],
        "responsavel": {
            "_id": "u-2",
            "name": "Ivo",
            "email": "ivo@example.com",
            "accessLevel": "Gestor"
        }
    }))
    .unwrap()
}

// =============================================================
// Comment predicate
// =============================================================

#[test]
fn blank_comment_is_not_sendable() {
    assert!(!comentario_valido(""));
    assert!(!comentario_valido("   "));
    assert!(!comentario_valido("\n\t"));
}

#[test]
fn comment_with_visible_text_is_sendable() {
    assert!(comentario_valido("Segue em anexo."));
    assert!(comentario_valido("  ok  "));
}

// =============================================================
// Create draft
// =============================================================

#[test]
fn draft_defaults_to_media_priority() {
    let d = ChamadoDraft::default();
    assert_eq!(d.prioridade, Prioridade::Media);
    assert!(d.titulo.is_empty());
}

#[test]
fn draft_without_modulo_is_rejected_with_exact_message() {
    let d = ChamadoDraft {
        modulo: String::new(),
        ..filled_draft()
    };
    assert_eq!(d.validate(), Err("O campo Módulo é obrigatório.".to_owned()));

    // Whitespace-only counts as missing.
    let d = ChamadoDraft {
        modulo: "  ".to_owned(),
        ..filled_draft()
    };
    assert_eq!(d.validate(), Err(MSG_MODULO_OBRIGATORIO.to_owned()));
}

#[test]
fn draft_without_descricao_is_rejected() {
    let d = ChamadoDraft {
        descricao: String::new(),
        ..filled_draft()
    };
    assert_eq!(d.validate(), Err(MSG_DESCRICAO_OBRIGATORIA.to_owned()));
}

#[test]
fn valid_draft_passes() {
    assert_eq!(filled_draft().validate(), Ok(()));
}

#[test]
fn to_request_parses_tags_and_sets_requester() {
    let req = filled_draft().to_request("u-1");
    assert_eq!(req.tags, vec!["a", "b", "c"]);
    assert_eq!(req.solicitante_id, "u-1");
    assert_eq!(req.prioridade, Prioridade::Alta);
}

// =============================================================
// Edit form
// =============================================================

#[test]
fn edit_form_populates_from_ticket() {
    let form = ChamadoEditForm::from_chamado(&chamado());
    assert_eq!(form.tags, "a, b");
    assert_eq!(form.responsavel_id, "u-2");
    assert_eq!(form.status, "Iniciado");
    assert_eq!(form.prioridade, Prioridade::Baixa);
}

#[test]
fn edit_form_unassigned_ticket_has_empty_responsavel() {
    let mut c = chamado();
    c.responsavel = None;
    let form = ChamadoEditForm::from_chamado(&c);
    assert!(form.responsavel_id.is_empty());
    assert!(form.to_update().responsavel_id.is_none());
}

#[test]
fn edit_form_requires_modulo_then_status() {
    let mut form = ChamadoEditForm::from_chamado(&chamado());
    form.modulo = String::new();
    form.status = String::new();
    assert_eq!(form.validate(), Err(MSG_MODULO_OBRIGATORIO.to_owned()));

    form.modulo = "Sistema".to_owned();
    assert_eq!(form.validate(), Err("O campo Status é obrigatório.".to_owned()));

    form.status = "Concluído".to_owned();
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn edit_round_trip_keeps_tags_stable() {
    // ["a","b"] -> "a, b" -> ["a","b"]
    let form = ChamadoEditForm::from_chamado(&chamado());
    assert_eq!(form.to_update().tags, vec!["a", "b"]);
}

#[test]
fn to_update_keeps_nonempty_assignment() {
    let form = ChamadoEditForm::from_chamado(&chamado());
    assert_eq!(form.to_update().responsavel_id.as_deref(), Some("u-2"));
}

#[test]
fn reassignment_applies_new_user_id() {
    let mut form = ChamadoEditForm::from_chamado(&chamado());
    form.responsavel_id = "u-9".to_owned();
    assert_eq!(form.to_update().responsavel_id.as_deref(), Some("u-9"));
}
