use std::rc::Rc;

use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::core::error::ApiError;
use crate::core::services::{storage, AuthToken, HttpTaskStore, Session, TaskStore};
use crate::pages::{AuthMode, AuthPage, Dashboard, Home, Kanban};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Login,
    Signup,
    Dashboard,
    Kanban,
}

impl AppView {
    pub fn is_protected(&self) -> bool {
        matches!(self, AppView::Dashboard | AppView::Kanban)
    }

    /// Protected screens send a signed-out user to the login screen.
    pub fn guard(self, session: &Session) -> AppView {
        if self.is_protected() && !session.is_authenticated() {
            AppView::Login
        } else {
            self
        }
    }
}

// Session lifecycle: persisted on sign in, removed on sign out
pub fn sign_in(session: RwSignal<Session>, token: AuthToken) {
    storage::save_session(&token);
    session.set(Session::signed_in(token));
}

pub fn sign_out(session: RwSignal<Session>) {
    storage::clear_session();
    session.set(Session::signed_out());
}

/// The task store for the current session, or `Unauthorized` when signed out.
pub fn session_store(session: &Session, config: &AppConfig) -> Result<Rc<dyn TaskStore>, ApiError> {
    let token = session.token().ok_or(ApiError::Unauthorized)?;
    let store = HttpTaskStore::for_session(config, token)?;
    Ok(Rc::new(store))
}

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(storage::load_session());
    let config = RwSignal::new(storage::load_settings());

    let initial = if session.get_untracked().is_authenticated() {
        AppView::Dashboard
    } else {
        AppView::Home
    };
    let (current_view, set_current_view) = signal(initial);

    provide_context(set_current_view);
    provide_context(session);
    provide_context(config);

    view! {
        <main class="app">
            {move || match session.with(|s| current_view.get().guard(s)) {
                AppView::Home => view! { <Home /> }.into_any(),
                AppView::Login => view! { <AuthPage mode=AuthMode::Login /> }.into_any(),
                AppView::Signup => view! { <AuthPage mode=AuthMode::Signup /> }.into_any(),
                AppView::Dashboard => view! { <Dashboard /> }.into_any(),
                AppView::Kanban => view! { <Kanban /> }.into_any(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_views_require_a_session() {
        let signed_out = Session::signed_out();
        assert_eq!(AppView::Dashboard.guard(&signed_out), AppView::Login);
        assert_eq!(AppView::Kanban.guard(&signed_out), AppView::Login);
        assert_eq!(AppView::Signup.guard(&signed_out), AppView::Signup);
        assert_eq!(AppView::Home.guard(&signed_out), AppView::Home);

        let signed_in = Session::signed_in(AuthToken::new("t").unwrap());
        assert_eq!(AppView::Kanban.guard(&signed_in), AppView::Kanban);
    }

    #[test]
    fn session_store_needs_a_token_and_a_valid_url() {
        let config = AppConfig::default();
        assert!(matches!(
            session_store(&Session::signed_out(), &config),
            Err(ApiError::Unauthorized)
        ));

        let signed_in = Session::signed_in(AuthToken::new("t").unwrap());
        assert!(session_store(&signed_in, &config).is_ok());

        let broken = AppConfig {
            api_base_url: "ftp://example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            session_store(&signed_in, &broken),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
