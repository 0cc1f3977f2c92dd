use leptos::html::Dialog;
use leptos::prelude::*;

use crate::core::config::{AppConfig, UpdatePolicy};
use crate::core::services::storage;

/// Edits the stored client settings. The board reloads with the new API
/// URL and policy at once; the log level applies on the next page load.
#[component]
pub fn SettingsModal(dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    let config = use_context::<RwSignal<AppConfig>>().expect("config context");

    // Edit a local copy; the shared config only changes on save
    let (api_base_url, set_api_base_url) = signal(config.with_untracked(|c| c.api_base_url.clone()));
    let (policy, set_policy) = signal(config.with_untracked(|c| c.update_policy));
    let (log_level, set_log_level) = signal(config.with_untracked(|c| c.log_level.clone()));

    let close_modal = move |_| {
        if let Some(d) = dialog_ref.get() {
            d.close();
        }
        // Drop unsaved edits
        config.with_untracked(|c| {
            set_api_base_url.set(c.api_base_url.clone());
            set_policy.set(c.update_policy);
            set_log_level.set(c.log_level.clone());
        });
    };

    let save_settings = move |_| {
        // Run the edits through the same parser as stored settings so blanks get defaults
        let raw = serde_json::json!({
            "api_base_url": api_base_url.get_untracked(),
            "update_policy": policy.get_untracked(),
            "log_level": log_level.get_untracked(),
        });
        match AppConfig::from_json(&raw.to_string()) {
            Ok(updated) => {
                // Persist first, then update the context; the board page rebuilds from it
                storage::save_settings(&updated);
                config.set(updated);
            }
            Err(e) => tracing::error!("Invalid settings: {}", e),
        }
        if let Some(d) = dialog_ref.get() {
            d.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal settings-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Settings"</h2>
                    <button class="modal-close" on:click=close_modal>"x"</button>
                </div>
                <div class="modal-section">
                    <div class="form-group">
                        <label>"API URL"</label>
                        <input
                            type="text"
                            placeholder="http://localhost:5000"
                            prop:value=move || api_base_url.get()
                            on:input=move |ev| set_api_base_url.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"When a card changes column"</label>
                        <select
                            prop:value=move || policy.get().as_str()
                            on:change=move |ev| {
                                if let Ok(p) = event_target_value(&ev).parse::<UpdatePolicy>() {
                                    set_policy.set(p);
                                }
                            }
                        >
                            {UpdatePolicy::all()
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Log level"</label>
                        <select
                            prop:value=move || log_level.get()
                            on:change=move |ev| set_log_level.set(event_target_value(&ev))
                        >
                            {["error", "warn", "info", "debug", "trace"]
                                .into_iter()
                                .map(|level| view! { <option value=level>{level}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" on:click=close_modal>"Cancel"</button>
                    <button class="btn-primary" on:click=save_settings>"Save"</button>
                </div>
            </div>
        </dialog>
    }
}
