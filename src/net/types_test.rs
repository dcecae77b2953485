use super::*;

fn ticket_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "abc123",
        "sequentialId": 42,
        "titulo": "Erro ao salvar cliente",
        "solicitante": {
            "_id": "u-1",
            "name": "Maria",
            "email": "maria@example.com",
            "accessLevel": "Operador"
        },
        "prioridade": "Média",
        "modulo": "Sistema",
        "status": "A Iniciar",
        "descricao": "Ao salvar, o sistema exibe erro 500.",
        "tags": ["erro", "sistema"],
        "anexos": [{
            "fileName": "print.png",
            "filePath": "/uploads/print.png",
            "fileType": "image/png",
            "uploadedAt": "2025-05-10T12:00:00.000Z"
        }],
        "historico": [{
            "usuario": {
                "_id": "u-1",
                "name": "Maria",
                "email": "maria@example.com",
                "accessLevel": "Operador"
            },
            "acao": "Comentário adicionado",
            "detalhes": { "comentario": "Segue anexo." },
            "data": "2025-05-10T12:01:00.000Z"
        }],
        "createdAt": "2025-05-10T11:59:00.000Z",
        "updatedAt": "2025-05-10T12:01:00.000Z"
    })
}

// =============================================================
// Ticket decoding
// =============================================================

#[test]
fn chamado_decodes_full_payload() {
    let c: Chamado = serde_json::from_value(ticket_json()).unwrap();
    assert_eq!(c.id, "abc123");
    assert_eq!(c.sequential_id, 42);
    assert_eq!(c.prioridade, Prioridade::Media);
    assert_eq!(c.solicitante.as_ref().unwrap().name, "Maria");
    assert!(c.responsavel.is_none());
    assert_eq!(c.tags, vec!["erro", "sistema"]);
    assert_eq!(c.anexos[0].file_name, "print.png");
    assert!(c.sla_due_date.is_none());
}

#[test]
fn chamado_decodes_sparse_list_payload() {
    // List endpoints omit description/history/attachments.
    let c: Chamado = serde_json::from_value(serde_json::json!({
        "_id": "abc",
        "sequentialId": 1,
        "modulo": "Financeiro",
        "status": "Iniciado"
    }))
    .unwrap();
    assert!(c.descricao.is_empty());
    assert!(c.historico.is_empty());
    assert!(c.anexos.is_empty());
    assert_eq!(c.prioridade, Prioridade::Media);
}

#[test]
fn historico_comentario_reads_detalhes() {
    let c: Chamado = serde_json::from_value(ticket_json()).unwrap();
    assert_eq!(c.historico[0].comentario(), Some("Segue anexo."));

    let entry = HistoricoItem {
        usuario: None,
        acao: "Status alterado".to_owned(),
        detalhes: Some(serde_json::json!({"de": "A Iniciar", "para": "Iniciado"})),
        justificativa: None,
        data: "2025-05-11T09:00:00.000Z".to_owned(),
    };
    assert_eq!(entry.comentario(), None);
}

// =============================================================
// Login response
// =============================================================

#[test]
fn login_response_flattens_user_fields() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt-token",
        "_id": "u-9",
        "name": "Ivo",
        "email": "ivo@example.com",
        "accessLevel": "Administrador"
    }))
    .unwrap();
    assert_eq!(resp.token, "jwt-token");
    assert_eq!(resp.user.id, "u-9");
    assert_eq!(resp.user.access_level, AccessLevel::Administrador);
}

// =============================================================
// Enums
// =============================================================

#[test]
fn prioridade_serializes_with_accent() {
    assert_eq!(
        serde_json::to_string(&Prioridade::Media).unwrap(),
        "\"Média\""
    );
    let p: Prioridade = serde_json::from_str("\"Média\"").unwrap();
    assert_eq!(p, Prioridade::Media);
}

#[test]
fn prioridade_from_select_value() {
    assert_eq!(Prioridade::from_value("Alta"), Prioridade::Alta);
    assert_eq!(Prioridade::from_value("Baixa"), Prioridade::Baixa);
    assert_eq!(Prioridade::from_value("Média"), Prioridade::Media);
    assert_eq!(Prioridade::from_value("???"), Prioridade::Media);
}

#[test]
fn chamado_update_serializes_cleared_assignment_as_null() {
    let update = ChamadoUpdate {
        titulo: "t".to_owned(),
        modulo: "Sistema".to_owned(),
        prioridade: Prioridade::Alta,
        status: "Iniciado".to_owned(),
        descricao: "d".to_owned(),
        tags: vec!["a".to_owned()],
        responsavel_id: None,
    };
    let v = serde_json::to_value(&update).unwrap();
    assert_eq!(v["responsavelId"], serde_json::Value::Null);
    assert_eq!(v["prioridade"], "Alta");
}
