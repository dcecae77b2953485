//! Login page: email/password form backed by the session service.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

const LOGIN_FALLBACK: &str = "Ocorreu um erro ao tentar fazer login. Tente novamente.";

/// Login page: submits credentials and redirects to the dashboard on
/// success; failures stay inline and leave the session untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionStore>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let email_value = email.get();
            let password_value = password.get();
            pending.set(true);
            leptos::task::spawn_local(async move {
                match session.login(&email_value, &password_value).await {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.user_message(LOGIN_FALLBACK))),
                }
                pending.set(false);
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1 class="login-page__title">"Fono com Amor - Login"</h1>
                <form class="login-page__form" on:submit=on_submit>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            autocomplete="email"
                            placeholder="seuemail@exemplo.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Senha"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Sua senha"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error.get().is_some()>
                        <div class="form__error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <button
                        class="btn btn--primary login-page__submit"
                        type="submit"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
