use leptos::prelude::*;

use crate::core::models::TaskStatus;
use crate::features::dashboard::services::{SortKey, StatusFilter};

#[component]
pub fn FilterSortOptions(
    filter: RwSignal<StatusFilter>,
    sort: RwSignal<Option<SortKey>>,
) -> impl IntoView {
    let filter_value = move || match filter.get() {
        StatusFilter::All => "all".to_string(),
        StatusFilter::Only(status) => status.as_str().to_string(),
    };
    let sort_value = move || sort.get().map(|k| k.value()).unwrap_or("");

    view! {
        <div class="filter-sort-options">
            <label>
                "Filter by Status: "
                <select
                    prop:value=filter_value
                    on:change=move |ev| filter.set(StatusFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="all">"All"</option>
                    {TaskStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Sort by: "
                <select
                    prop:value=sort_value
                    on:change=move |ev| sort.set(SortKey::from_value(&event_target_value(&ev)))
                >
                    <option value="">"None"</option>
                    {SortKey::all()
                        .into_iter()
                        .map(|k| view! { <option value=k.value()>{k.label()}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
