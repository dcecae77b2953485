//! Draft state and client-side validation for the ticket forms.
//!
//! Validation is field-presence only; the backend stays the authority
//! for business rules. A draft that fails validation never produces an
//! HTTP request.

#[cfg(test)]
#[path = "ticket_form_test.rs"]
mod ticket_form_test;

use crate::net::types::{Chamado, ChamadoUpdate, NovoChamado, Prioridade};
use crate::util::tags;

pub const MSG_MODULO_OBRIGATORIO: &str = "O campo Módulo é obrigatório.";
pub const MSG_STATUS_OBRIGATORIO: &str = "O campo Status é obrigatório.";
pub const MSG_DESCRICAO_OBRIGATORIA: &str = "O campo Descrição é obrigatório.";

/// Module options offered by the create/edit selects.
pub const MODULOS: &[&str] = &[
    "Sistema",
    "Financeiro",
    "Atendimento",
    "Administrativo",
    "Outro",
];

/// Status options offered by the edit select.
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("A Iniciar", "A Iniciar"),
    ("Iniciado", "Iniciado"),
    ("Aguardando Ivo", "Aguardando Ivo (Informação do Usuário)"),
    ("Aguardando FCA", "Aguardando FCA (Clínica)"),
    ("Concluído", "Concluído"),
    ("Abandonado", "Abandonado"),
];

/// A comment must carry visible text; blank or whitespace-only input
/// never produces an HTTP request.
pub fn comentario_valido(texto: &str) -> bool {
    !texto.trim().is_empty()
}

/// Draft of the create-ticket form. `tags` holds the raw
/// comma-separated input; it is parsed only at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChamadoDraft {
    pub titulo: String,
    pub modulo: String,
    pub prioridade: Prioridade,
    pub descricao: String,
    pub tags: String,
}

impl ChamadoDraft {
    /// Field-presence check; the first missing field wins.
    ///
    /// # Errors
    ///
    /// The user-facing message for the missing field.
    pub fn validate(&self) -> Result<(), String> {
        if self.modulo.trim().is_empty() {
            return Err(MSG_MODULO_OBRIGATORIO.to_owned());
        }
        if self.descricao.trim().is_empty() {
            return Err(MSG_DESCRICAO_OBRIGATORIA.to_owned());
        }
        Ok(())
    }

    /// Build the multipart payload, attributing the ticket to the
    /// logged-in requester.
    pub fn to_request(&self, solicitante_id: &str) -> NovoChamado {
        NovoChamado {
            titulo: self.titulo.clone(),
            modulo: self.modulo.clone(),
            prioridade: self.prioridade,
            descricao: self.descricao.clone(),
            solicitante_id: solicitante_id.to_owned(),
            tags: tags::parse(&self.tags),
        }
    }
}

/// Draft of the edit-ticket form, pre-populated from a fetched ticket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChamadoEditForm {
    pub titulo: String,
    pub modulo: String,
    pub prioridade: Prioridade,
    pub status: String,
    pub descricao: String,
    pub tags: String,
    /// Id of the assigned user; empty means unassigned.
    pub responsavel_id: String,
}

impl ChamadoEditForm {
    pub fn from_chamado(chamado: &Chamado) -> Self {
        Self {
            titulo: chamado.titulo.clone(),
            modulo: chamado.modulo.clone(),
            prioridade: chamado.prioridade,
            status: chamado.status.clone(),
            descricao: chamado.descricao.clone(),
            tags: tags::join(&chamado.tags),
            responsavel_id: chamado
                .responsavel
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_default(),
        }
    }

    /// Field-presence check for the editable required fields.
    ///
    /// # Errors
    ///
    /// The user-facing message for the missing field.
    pub fn validate(&self) -> Result<(), String> {
        if self.modulo.trim().is_empty() {
            return Err(MSG_MODULO_OBRIGATORIO.to_owned());
        }
        if self.status.trim().is_empty() {
            return Err(MSG_STATUS_OBRIGATORIO.to_owned());
        }
        Ok(())
    }

    /// Build the PUT payload; an empty assignment becomes `null`.
    pub fn to_update(&self) -> ChamadoUpdate {
        ChamadoUpdate {
            titulo: self.titulo.clone(),
            modulo: self.modulo.clone(),
            prioridade: self.prioridade,
            status: self.status.clone(),
            descricao: self.descricao.clone(),
            tags: tags::parse(&self.tags),
            responsavel_id: if self.responsavel_id.trim().is_empty() {
                None
            } else {
                Some(self.responsavel_id.clone())
            },
        }
    }
}
