//! Ticket list page: the full collection rendered as a table.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::net::api;
use crate::net::types::{Chamado, Prioridade};
use crate::state::guard::ALL_ROLES;
use crate::state::session::SessionStore;
use crate::util::datetime::short_date;

pub(crate) fn prioridade_class(p: Prioridade) -> &'static str {
    match p {
        Prioridade::Alta => "badge badge--alta",
        Prioridade::Media => "badge badge--media",
        Prioridade::Baixa => "badge badge--baixa",
    }
}

#[component]
pub fn TicketListPage() -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=ALL_ROLES.to_vec()>
            <TicketList/>
        </ProtectedRoute>
    }
}

#[component]
fn TicketList() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    // One independent fetch per mount; no pagination.
    let chamados = LocalResource::new(move || {
        let token = session.token();
        async move {
            match token {
                Some(token) => api::fetch_chamados(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    view! {
        <div class="ticket-list-page">
            <header class="page-header">
                <h1 class="page-header__title">"Lista de Chamados"</h1>
                <div class="page-header__actions">
                    <a href="/chamados/novo" class="btn btn--primary">"Abrir Novo Chamado"</a>
                    <a href="/dashboard" class="btn">"Voltar ao Dashboard"</a>
                </div>
            </header>

            <div class="ticket-list-page__filters">
                <p>"Filtros avançados aqui..."</p>
            </div>

            <Suspense fallback=move || view! { <p>"Carregando chamados..."</p> }>
                {move || {
                    chamados
                        .get()
                        .map(|result| match result {
                            Err(e) => view! {
                                <p class="form__error">
                                    "Erro: " {e.user_message("Falha ao carregar chamados.")}
                                </p>
                            }
                                .into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <p class="ticket-list-page__empty">"Nenhum chamado encontrado."</p>
                            }
                                .into_any(),
                            Ok(list) => view! {
                                <div class="ticket-list-page__table-wrap">
                                    <table class="ticket-table">
                                        <thead>
                                            <tr>
                                                <th>"ID"</th>
                                                <th>"Título"</th>
                                                <th>"Solicitante"</th>
                                                <th>"Responsável"</th>
                                                <th>"Prioridade"</th>
                                                <th>"Módulo"</th>
                                                <th>"Status"</th>
                                                <th>"Abertura"</th>
                                                <th>"SLA"</th>
                                                <th>"Ações"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|c| view! { <TicketRow chamado=c/> })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TicketRow(chamado: Chamado) -> impl IntoView {
    let titulo = if chamado.titulo.is_empty() {
        "Chamado sem título".to_owned()
    } else {
        chamado.titulo.clone()
    };
    let solicitante = chamado
        .solicitante
        .as_ref()
        .map_or_else(|| "N/A".to_owned(), |u| u.name.clone());
    let responsavel = chamado
        .responsavel
        .as_ref()
        .map_or_else(|| "-".to_owned(), |u| u.name.clone());
    let abertura = short_date(&chamado.created_at).to_owned();
    let sla = chamado
        .sla_due_date
        .as_deref()
        .map_or_else(|| "-".to_owned(), |d| short_date(d).to_owned());

    view! {
        <tr class="ticket-table__row">
            <td>{chamado.sequential_id}</td>
            <td>
                <a class="ticket-table__link" href=format!("/chamados/{}", chamado.id)>
                    {titulo}
                </a>
            </td>
            <td>{solicitante}</td>
            <td>{responsavel}</td>
            <td>
                <span class=prioridade_class(chamado.prioridade)>
                    {chamado.prioridade.as_str()}
                </span>
            </td>
            <td>{chamado.modulo.clone()}</td>
            <td>{chamado.status.clone()}</td>
            <td>{abertura}</td>
            <td>{sla}</td>
            <td>
                <a class="ticket-table__link" href=format!("/chamados/{}/editar", chamado.id)>
                    "Editar"
                </a>
            </td>
        </tr>
    }
}
