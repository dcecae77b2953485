//! Edit-ticket page: pre-populated form, PUT of the edited fields.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Prioridade;
use crate::state::guard::ALL_ROLES;
use crate::state::session::SessionStore;
use crate::state::ticket_form::{ChamadoEditForm, MODULOS, STATUS_OPTIONS};

const UPDATE_FALLBACK: &str = "Falha ao atualizar chamado. Verifique os campos e tente novamente.";

#[component]
pub fn EditTicketPage() -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=ALL_ROLES.to_vec()>
            <EditTicketForm/>
        </ProtectedRoute>
    }
}

#[component]
fn EditTicketForm() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let params = use_params_map();
    let ticket_id = move || params.read().get("id").unwrap_or_default();

    let form = RwSignal::new(ChamadoEditForm::default());
    let solicitante_nome = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Fetch the current ticket to pre-populate the form.
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
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_chamado(&token, &id).await {
                    Ok(c) => {
                        form.set(ChamadoEditForm::from_chamado(&c));
                        solicitante_nome.set(
                            c.solicitante
                                .as_ref()
                                .map_or_else(|| "N/A".to_owned(), |u| u.name.clone()),
                        );
                        loaded.set(true);
                    }
                    Err(e) => load_error.set(Some(
                        e.user_message("Falha ao carregar dados do chamado para edição."),
                    )),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let current = form.get_untracked();
        if let Err(msg) = current.validate() {
            error.set(Some(msg));
            return;
        }
        let Some(token) = session.token() else {
            error.set(Some("Não foi possível atualizar o chamado. Tente novamente.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let id = ticket_id();
            let update = current.to_update();
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_chamado(&token, &id, &update).await {
                    Ok(_) => navigate(&format!("/chamados/{id}"), NavigateOptions::default()),
                    Err(e) => error.set(Some(e.user_message(UPDATE_FALLBACK))),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    };

    view! {
        <div class="ticket-form-page">
            <header class="page-header">
                <h1 class="page-header__title">"Editar Chamado"</h1>
                <a
                    href=move || format!("/chamados/{}", ticket_id())
                    class="page-header__back"
                >
                    "← Voltar para Detalhes"
                </a>
            </header>

            {move || {
                if let Some(msg) = load_error.get() {
                    return view! {
                        <div class="ticket-form-page__notice">
                            <p class="form__error">{msg}</p>
                            <a href="/chamados">"← Voltar para a Lista de Chamados"</a>
                        </div>
                    }
                        .into_any();
                }
                if !loaded.get() {
                    return view! { <p>"Carregando dados do chamado..."</p> }.into_any();
                }
                view! {
                    <form class="ticket-form" on:submit=on_submit.clone()>
                        <label class="form__label">
                            "Solicitante"
                            <input
                                class="form__input"
                                type="text"
                                disabled
                                prop:value=move || solicitante_nome.get()
                            />
                        </label>

                        <label class="form__label">
                            "Título do Chamado" <span class="form__required">"*"</span>
                            <input
                                class="form__input"
                                type="text"
                                required
                                prop:value=move || form.get().titulo
                                on:input=move |ev| {
                                    form.update(|f| f.titulo = event_target_value(&ev));
                                }
                            />
                        </label>

                        <label class="form__label">
                            "Módulo" <span class="form__required">"*"</span>
                            <select
                                class="form__input"
                                required
                                prop:value=move || form.get().modulo
                                on:change=move |ev| {
                                    form.update(|f| f.modulo = event_target_value(&ev));
                                }
                            >
                                <option value="">"Selecione o Módulo"</option>
                                {MODULOS
                                    .iter()
                                    .map(|m| view! { <option value=*m>{*m}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="form__label">
                            "Prioridade" <span class="form__required">"*"</span>
                            <select
                                class="form__input"
                                required
                                prop:value=move || form.get().prioridade.as_str()
                                on:change=move |ev| {
                                    form.update(|f| {
                                        f.prioridade =
                                            Prioridade::from_value(&event_target_value(&ev));
                                    });
                                }
                            >
                                <option value="Baixa">"Baixa"</option>
                                <option value="Média">"Média"</option>
                                <option value="Alta">"Alta"</option>
                            </select>
                        </label>

                        <label class="form__label">
                            "Status" <span class="form__required">"*"</span>
                            <select
                                class="form__input"
                                required
                                prop:value=move || form.get().status
                                on:change=move |ev| {
                                    form.update(|f| f.status = event_target_value(&ev));
                                }
                            >
                                {STATUS_OPTIONS
                                    .iter()
                                    .map(|(value, label)| {
                                        view! { <option value=*value>{*label}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="form__label">
                            "Responsável (id do usuário, vazio para remover)"
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.get().responsavel_id
                                on:input=move |ev| {
                                    form.update(|f| f.responsavel_id = event_target_value(&ev));
                                }
                            />
                        </label>

                        <label class="form__label">
                            "Descrição Detalhada" <span class="form__required">"*"</span>
                            <textarea
                                class="form__input"
                                rows="6"
                                required
                                prop:value=move || form.get().descricao
                                on:input=move |ev| {
                                    form.update(|f| f.descricao = event_target_value(&ev));
                                }
                            ></textarea>
                        </label>

                        <label class="form__label">
                            "Tags (separadas por vírgula)"
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.get().tags
                                on:input=move |ev| {
                                    form.update(|f| f.tags = event_target_value(&ev));
                                }
                            />
                        </label>

                        <Show when=move || error.get().is_some()>
                            <div class="form__error">{move || error.get().unwrap_or_default()}</div>
                        </Show>

                        <div class="ticket-form__actions">
                            <a href=move || format!("/chamados/{}", ticket_id()) class="btn">
                                "Cancelar"
                            </a>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || pending.get()
                            >
                                {move || {
                                    if pending.get() { "Salvando..." } else { "Salvar Alterações" }
                                }}
                            </button>
                        </div>
                    </form>
                }
                    .into_any()
            }}
        </div>
    }
}
