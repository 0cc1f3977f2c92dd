use leptos::prelude::*;
use leptos::ev;
use leptos::task::spawn_local;
use crate::app::{sign_in, AppView};
use crate::core::config::AppConfig;
use crate::core::services::{ApiClient, AuthService, Credentials, HttpAuthService, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log In",
            AuthMode::Signup => "Sign Up",
        }
    }
}

#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let session = use_context::<RwSignal<Session>>().expect("session context");
    let config = use_context::<RwSignal<AppConfig>>().expect("config context");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let base_url = config.with_untracked(|c| c.api_base_url.clone());
        set_submitting.set(true);

        spawn_local(async move {
            let result = match ApiClient::new(&base_url) {
                Ok(client) => {
                    let auth = HttpAuthService::new(client);
                    match mode {
                        AuthMode::Login => auth.login(&credentials).await,
                        AuthMode::Signup => auth.signup(&credentials).await,
                    }
                }
                Err(e) => Err(e.into()),
            };
            set_submitting.set(false);

            match result {
                Ok(token) => {
                    set_error.set(None);
                    sign_in(session, token);
                    navigate.set(AppView::Dashboard);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let (switch_prompt, switch_label, switch_view) = match mode {
        AuthMode::Login => ("Don't have an account?", "Sign Up", AppView::Signup),
        AuthMode::Signup => ("Already have an account?", "Login", AppView::Login),
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>{mode.title()}</h2>

                {move || error.get().map(|message| view! {
                    <div class="alert alert-error">
                        <strong>"Error"</strong>
                        <p>{message}</p>
                    </div>
                })}

                <form on:submit=handle_submit>
                    <div class="form-group">
                        <input
                            type="email"
                            placeholder="Email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=move || email.get()
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="password"
                            placeholder="Password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=move || password.get()
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {mode.submit_label()}
                    </button>
                </form>

                <p class="auth-switch">
                    {switch_prompt} " "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        navigate.set(switch_view);
                    }>{switch_label}</a>
                </p>
            </div>
        </div>
    }
}
