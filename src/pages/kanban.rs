use std::rc::Rc;

use leptos::html::Dialog;
use leptos::prelude::*;

use crate::app::{session_store, sign_out, AppView};
use crate::core::config::AppConfig;
use crate::core::models::TaskStatus;
use crate::core::services::{Session, TaskStore};
use crate::features::kanban::{use_board, KanbanColumn, KanbanHeader, SettingsModal};

#[component]
pub fn Kanban() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let session = use_context::<RwSignal<Session>>().expect("session context");
    let config = use_context::<RwSignal<AppConfig>>().expect("config context");

    let on_logout = Callback::new(move |_: ()| {
        sign_out(session);
        navigate.set(AppView::Home);
    });
    // The store rejected the token
    let on_expired = Callback::new(move |_: ()| {
        sign_out(session);
        navigate.set(AppView::Login);
    });

    // Settings changes rebuild the board with the new store and policy
    move || {
        let config = config.get();
        match session.with_untracked(|s| session_store(s, &config)) {
            Ok(store) => view! {
                <KanbanContent store=store config=config on_logout=on_logout on_expired=on_expired />
            }
            .into_any(),
            Err(e) => {
                tracing::error!("Cannot open task store: {}", e);
                view! {
                    <div class="alert alert-error">
                        <strong>"Error"</strong>
                        <p>{e.to_string()}</p>
                        <button class="btn-secondary" on:click=move |_| on_expired.run(())>"Sign in again"</button>
                    </div>
                }
                .into_any()
            }
        }
    }
}

#[component]
fn KanbanContent(
    store: Rc<dyn TaskStore>,
    config: AppConfig,
    on_logout: Callback<()>,
    on_expired: Callback<()>,
) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let hook = use_board(store, config.update_policy, on_expired);

    let settings_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let open_settings = Callback::new(move |_: ()| {
        if let Some(dialog) = settings_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    view! {
        <div class="kanban-page">
            <KanbanHeader
                policy=hook.policy
                pending=hook.pending
                on_back=Callback::new(move |_: ()| navigate.set(AppView::Dashboard))
                on_refresh=hook.refresh
                on_open_settings=open_settings
                on_logout=on_logout
            />

            {move || hook.banner.get().map(|message| view! {
                <div class="alert alert-error sync-banner">
                    <p>{message}</p>
                    <button class="modal-close" on:click=move |_| hook.dismiss_banner.run(())>"x"</button>
                </div>
            })}

            <div class="kanban-board">
                {TaskStatus::all()
                    .into_iter()
                    .map(|status| view! {
                        <KanbanColumn
                            status=status
                            board=hook.board
                            dragging=hook.dragging
                            on_drop=hook.on_drop
                        />
                    })
                    .collect_view()}
            </div>

            <SettingsModal dialog_ref=settings_dialog_ref />
        </div>
    }
}
