use leptos::prelude::*;

use crate::core::config::UpdatePolicy;

#[component]
pub fn KanbanHeader(
    policy: UpdatePolicy,
    pending: RwSignal<usize>,
    on_back: Callback<()>,
    on_refresh: Callback<()>,
    on_open_settings: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>"Kanban Board"</h1>
                <span class="policy-label" title="Update policy">{policy.label()}</span>
                // Only shown while status updates are still waiting on the store
                <Show when=move || { pending.get() > 0 }>
                    <span class="sync-indicator">
                        {move || format!("Saving {} change(s)...", pending.get())}
                    </span>
                </Show>
            </div>
            <div class="kanban-actions">
                <button class="btn-secondary kanban-header-btn" title="Back to dashboard" on:click=move |_| on_back.run(())>"🡄"</button>
                <button class="btn-secondary kanban-header-btn" title="Reload tasks" on:click=move |_| on_refresh.run(())>"⟳"</button>
                <button class="btn-secondary kanban-header-btn" title="Settings" on:click=move |_| on_open_settings.run(())>"⚙"</button>
                <button class="btn-primary kanban-header-btn" on:click=move |_| on_logout.run(())>"Logout"</button>
            </div>
        </header>
    }
}
