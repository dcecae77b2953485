//! Wire types for the ticket backend.
//!
//! Field names follow the backend's JSON contract (Portuguese domain
//! terms, camelCase keys, Mongo-style `_id`). Collections and optional
//! fields default so partial payloads from list endpoints still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user's role, used for coarse client-side authorization checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    Administrador,
    Gestor,
    Operador,
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Administrador => "Administrador",
            Self::Gestor => "Gestor",
            Self::Operador => "Operador",
        }
    }
}

/// An authenticated or referenced backend user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "accessLevel")]
    pub access_level: AccessLevel,
}

/// Response of `POST /auth/login`: the token plus the user fields inline.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

/// Ticket priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prioridade {
    Alta,
    #[default]
    #[serde(rename = "Média")]
    Media,
    Baixa,
}

impl Prioridade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alta => "Alta",
            Self::Media => "Média",
            Self::Baixa => "Baixa",
        }
    }

    /// Parse a `<select>` value; unknown input falls back to the default.
    pub fn from_value(value: &str) -> Self {
        match value {
            "Alta" => Self::Alta,
            "Baixa" => Self::Baixa,
            _ => Self::Media,
        }
    }
}

/// A file attached to a ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anexo {
    pub file_name: String,
    pub file_path: String,
    pub file_type: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// One append-only history entry (status changes, comments, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricoItem {
    #[serde(default)]
    pub usuario: Option<User>,
    pub acao: String,
    #[serde(default)]
    pub detalhes: Option<serde_json::Value>,
    #[serde(default)]
    pub justificativa: Option<String>,
    pub data: String,
}

impl HistoricoItem {
    /// Comment text carried in the free-form `detalhes` payload, if any.
    pub fn comentario(&self) -> Option<&str> {
        self.detalhes
            .as_ref()
            .and_then(|d| d.get("comentario"))
            .and_then(serde_json::Value::as_str)
    }
}

/// A support ticket ("chamado"). Owned by the backend; the client holds
/// a transient per-page copy fetched on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chamado {
    #[serde(rename = "_id")]
    pub id: String,
    pub sequential_id: i64,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub solicitante: Option<User>,
    #[serde(default)]
    pub responsavel: Option<User>,
    #[serde(default)]
    pub prioridade: Prioridade,
    pub modulo: String,
    pub status: String,
    #[serde(default)]
    pub sistema_ativo: bool,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub anexos: Vec<Anexo>,
    #[serde(default)]
    pub historico: Vec<HistoricoItem>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub sla_due_date: Option<String>,
}

/// Payload for `POST /tickets` (sent as multipart form data).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NovoChamado {
    pub titulo: String,
    pub modulo: String,
    pub prioridade: Prioridade,
    pub descricao: String,
    pub solicitante_id: String,
    pub tags: Vec<String>,
}

/// Payload for `PUT /tickets/:id`. `responsavel_id` serializes as `null`
/// when the assignment is cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamadoUpdate {
    pub titulo: String,
    pub modulo: String,
    pub prioridade: Prioridade,
    pub status: String,
    pub descricao: String,
    pub tags: Vec<String>,
    pub responsavel_id: Option<String>,
}
