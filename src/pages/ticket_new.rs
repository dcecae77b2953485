//! Create-ticket page: required fields, optional tags, file attachments,
//! submitted as one multipart payload.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Prioridade;
use crate::state::guard::ALL_ROLES;
use crate::state::session::SessionStore;
use crate::state::ticket_form::{ChamadoDraft, MODULOS};

const CREATE_FALLBACK: &str = "Falha ao criar chamado. Verifique os campos e tente novamente.";

#[component]
pub fn NewTicketPage() -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=ALL_ROLES.to_vec()>
            <NewTicketForm/>
        </ProtectedRoute>
    }
}

#[component]
fn NewTicketForm() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let draft = RwSignal::new(ChamadoDraft::default());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let anexos_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let current = draft.get_untracked();
        // Validation failure means no request is issued at all.
        if let Err(msg) = current.validate() {
            error.set(Some(msg));
            return;
        }
        let Some(user) = session.user() else {
            error.set(Some("Você precisa estar logado para criar um chamado.".to_owned()));
            return;
        };
        let Some(token) = session.token() else {
            error.set(Some("Você precisa estar logado para criar um chamado.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let files = anexos_ref.get_untracked().and_then(|input| input.files());
            let novo = current.to_request(&user.id);
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_chamado(&token, &novo, files.as_ref()).await {
                    Ok(created) => {
                        navigate(&format!("/chamados/{}", created.id), NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message(CREATE_FALLBACK))),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, token);
        }
    };

    view! {
        <div class="ticket-form-page">
            <header class="page-header">
                <h1 class="page-header__title">"Abrir Novo Chamado"</h1>
                <a href="/dashboard" class="page-header__back">"← Voltar para o Dashboard"</a>
            </header>

            <form class="ticket-form" on:submit=on_submit>
                <label class="form__label">
                    "Solicitante"
                    <input
                        class="form__input"
                        type="text"
                        disabled
                        prop:value=move || session.user().map(|u| u.name).unwrap_or_default()
                    />
                </label>

                <label class="form__label">
                    "Título do Chamado" <span class="form__required">"*"</span>
                    <input
                        class="form__input"
                        type="text"
                        required
                        placeholder="Ex: Erro ao salvar cliente"
                        prop:value=move || draft.get().titulo
                        on:input=move |ev| draft.update(|d| d.titulo = event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Módulo" <span class="form__required">"*"</span>
                    <select
                        class="form__input"
                        required
                        prop:value=move || draft.get().modulo
                        on:change=move |ev| draft.update(|d| d.modulo = event_target_value(&ev))
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
                        prop:value=move || draft.get().prioridade.as_str()
                        on:change=move |ev| {
                            draft
                                .update(|d| {
                                    d.prioridade = Prioridade::from_value(&event_target_value(&ev));
                                });
                        }
                    >
                        <option value="Baixa">"Baixa"</option>
                        <option value="Média">"Média"</option>
                        <option value="Alta">"Alta"</option>
                    </select>
                </label>

                <label class="form__label">
                    "Descrição Detalhada" <span class="form__required">"*"</span>
                    <textarea
                        class="form__input"
                        rows="6"
                        required
                        placeholder="Descreva o problema ou solicitação em detalhes..."
                        prop:value=move || draft.get().descricao
                        on:input=move |ev| draft.update(|d| d.descricao = event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form__label">
                    "Tags (separadas por vírgula)"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Ex: erro, sistema, urgente"
                        prop:value=move || draft.get().tags
                        on:input=move |ev| draft.update(|d| d.tags = event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Anexos (imagens, documentos, etc.)"
                    <input class="form__file" type="file" multiple node_ref=anexos_ref/>
                </label>

                <Show when=move || error.get().is_some()>
                    <div class="form__error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <div class="ticket-form__actions">
                    <a href="/dashboard" class="btn">"Cancelar"</a>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Abrindo Chamado..." } else { "Abrir Chamado" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
