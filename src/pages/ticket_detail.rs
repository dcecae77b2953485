//! Ticket detail page: description, attachments, append-only history,
//! and the comment box.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::protected_route::ProtectedRoute;
use crate::net::api;
use crate::net::types::Chamado;
use crate::pages::tickets::prioridade_class;
use crate::state::guard::ALL_ROLES;
use crate::state::session::SessionStore;
use crate::state::ticket_form::comentario_valido;
use crate::util::datetime::{date_time, short_date};
use crate::util::tags;

fn status_class(status: &str) -> &'static str {
    match status {
        "Concluído" => "badge badge--done",
        "Abandonado" => "badge badge--dropped",
        _ => "badge badge--active",
    }
}

#[component]
pub fn TicketDetailPage() -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=ALL_ROLES.to_vec()>
            <TicketDetail/>
        </ProtectedRoute>
    }
}

#[component]
fn TicketDetail() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let params = use_params_map();
    let ticket_id = move || params.read().get("id").unwrap_or_default();

    let chamado = RwSignal::new(None::<Chamado>);
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    // Fetch on mount and whenever the route id changes.
    Effect::new(move || {
        let id = ticket_id();
        let token = session.token();
        #[cfg(feature = "hydrate")]
        {
            if id.is_empty() {
                return;
            }
            let Some(token) = token else {
                return;
            };
            loading.set(true);
            load_error.set(None);
            leptos::task::spawn_local(async move {
                match api::fetch_chamado(&token, &id).await {
                    Ok(c) => chamado.set(Some(c)),
                    Err(e) => load_error.set(Some(
                        e.user_message("Falha ao carregar detalhes do chamado."),
                    )),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token);
        }
    });

    view! {
        <div class="ticket-detail-page">
            {move || {
                if let Some(msg) = load_error.get() {
                    return view! {
                        <div class="ticket-detail-page__notice">
                            <p class="form__error">{msg}</p>
                            <a href="/chamados">"← Voltar para a Lista de Chamados"</a>
                        </div>
                    }
                        .into_any();
                }
                if loading.get() && chamado.get().is_none() {
                    return view! { <p>"Carregando detalhes do chamado..."</p> }.into_any();
                }
                match chamado.get() {
                    Some(c) => view! { <TicketBody chamado=c store=chamado/> }.into_any(),
                    None => view! {
                        <div class="ticket-detail-page__notice">
                            <p>"Chamado não encontrado."</p>
                            <a href="/chamados">"← Voltar para a Lista de Chamados"</a>
                        </div>
                    }
                        .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn TicketBody(chamado: Chamado, store: RwSignal<Option<Chamado>>) -> impl IntoView {
    let attachment_root = api::server_root();

    let anexos = if chamado.anexos.is_empty() {
        view! { <p class="ticket-detail-page__none">"Nenhum anexo."</p> }.into_any()
    } else {
        view! {
            <ul class="attachment-list">
                {chamado
                    .anexos
                    .iter()
                    .map(|a| {
                        let href = format!("{attachment_root}{}", a.file_path);
                        let label = format!("{} ({})", a.file_name, a.file_type);
                        view! {
                            <li>
                                <a class="attachment-list__link" href=href target="_blank" rel="noopener noreferrer">
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    let historico = if chamado.historico.is_empty() {
        view! { <p class="ticket-detail-page__none">"Nenhum histórico ou comentário ainda."</p> }
            .into_any()
    } else {
        view! {
            <div class="history-list">
                {chamado
                    .historico
                    .iter()
                    .map(|item| {
                        let autor = item
                            .usuario
                            .as_ref()
                            .map_or_else(|| "Sistema".to_owned(), |u| u.name.clone());
                        let meta = format!("{} - {autor}", date_time(&item.data));
                        let comentario = item.comentario().map(str::to_owned);
                        let justificativa = item.justificativa.clone();
                        view! {
                            <div class="history-entry">
                                <p class="history-entry__meta">{meta}</p>
                                <p class="history-entry__acao">{item.acao.clone()}</p>
                                {comentario
                                    .map(|c| view! { <p class="history-entry__comentario">{c}</p> })}
                                {justificativa
                                    .map(|j| {
                                        view! {
                                            <p class="history-entry__justificativa">
                                                <i>"Justificativa: " {j}</i>
                                            </p>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    let solicitante = chamado
        .solicitante
        .as_ref()
        .map_or_else(|| "N/A (N/A)".to_owned(), |u| format!("{} ({})", u.name, u.email));
    let responsavel = chamado
        .responsavel
        .as_ref()
        .map_or_else(|| "Não atribuído".to_owned(), |u| format!("{} ({})", u.name, u.email));
    let sla = chamado
        .sla_due_date
        .as_deref()
        .map_or_else(|| "-".to_owned(), |d| short_date(d).to_owned());
    let tag_list = if chamado.tags.is_empty() {
        "Nenhuma".to_owned()
    } else {
        tags::join(&chamado.tags)
    };

    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">
                    "Detalhes do Chamado #" {chamado.sequential_id}
                </h1>
                <p class="page-header__subtitle">{chamado.titulo.clone()}</p>
            </div>
            <div class="page-header__actions">
                <a href=format!("/chamados/{}/editar", chamado.id) class="btn btn--primary">
                    "Editar Chamado"
                </a>
                <a href="/chamados" class="btn">"Voltar à Lista"</a>
            </div>
        </header>

        <div class="ticket-detail-page__grid">
            <div class="ticket-detail-page__main">
                <section>
                    <h2>"Descrição"</h2>
                    <p class="ticket-detail-page__descricao">{chamado.descricao.clone()}</p>
                </section>

                <section>
                    <h2>"Anexos"</h2>
                    {anexos}
                </section>

                <section>
                    <h2>"Histórico e Comentários"</h2>
                    {historico}
                    <CommentBox store=store/>
                </section>
            </div>

            <aside class="ticket-detail-page__info">
                <h2>"Informações do Chamado"</h2>
                <div>
                    <strong>"Status: "</strong>
                    <span class=status_class(&chamado.status)>{chamado.status.clone()}</span>
                </div>
                <div>
                    <strong>"Prioridade: "</strong>
                    <span class=prioridade_class(chamado.prioridade)>
                        {chamado.prioridade.as_str()}
                    </span>
                </div>
                <div><strong>"Módulo: "</strong>{chamado.modulo.clone()}</div>
                <div><strong>"Solicitante: "</strong>{solicitante}</div>
                <div><strong>"Responsável: "</strong>{responsavel}</div>
                <div><strong>"Data de Abertura: "</strong>{date_time(&chamado.created_at)}</div>
                <div><strong>"Última Atualização: "</strong>{date_time(&chamado.updated_at)}</div>
                <div><strong>"Prazo SLA: "</strong>{sla}</div>
                <div>
                    <strong>"Sistema Ativo: "</strong>
                    {if chamado.sistema_ativo { "Sim" } else { "Não" }}
                </div>
                <div><strong>"Tags: "</strong>{tag_list}</div>
            </aside>
        </div>
    }
}

/// Comment box appending one history entry via a dedicated call; the
/// response replaces local ticket state wholesale. Blank or
/// whitespace-only input keeps the button disabled and never issues a
/// request.
#[component]
fn CommentBox(store: RwSignal<Option<Chamado>>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let texto = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let can_send = move || comentario_valido(&texto.get());

    let do_send = move || {
        let body = texto.get_untracked();
        if !comentario_valido(&body) {
            return;
        }
        let Some(id) = store.get_untracked().map(|c| c.id) else {
            return;
        };
        let Some(token) = session.token() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            error.set(None);
            leptos::task::spawn_local(async move {
                match api::add_comentario(&token, &id, &body, true).await {
                    Ok(updated) => {
                        store.set(Some(updated));
                        texto.set(String::new());
                    }
                    Err(e) => error.set(Some(e.user_message("Falha ao adicionar comentário."))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token, body);
        }
    };

    view! {
        <div class="comment-box">
            <h3>"Adicionar Comentário"</h3>
            <textarea
                class="comment-box__input"
                rows="4"
                placeholder="Digite seu comentário aqui..."
                prop:value=move || texto.get()
                on:input=move |ev| texto.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || error.get().is_some()>
                <div class="form__error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <button
                class="btn btn--primary comment-box__submit"
                disabled=move || !can_send()
                on:click=move |_| do_send()
            >
                "Adicionar Comentário"
            </button>
        </div>
    }
}
