use leptos::prelude::*;
use crate::app::AppView;

#[component]
pub fn Home() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    view! {
        <div class="home-page">
            <h1>"Task Manager"</h1>
            <p>"Streamline your workflow and stay organized!"</p>
            <div class="home-actions">
                <button class="btn-primary" on:click=move |_| navigate.set(AppView::Login)>"Login"</button>
                <button class="btn-secondary" on:click=move |_| navigate.set(AppView::Signup)>"Sign Up"</button>
            </div>
        </div>
    }
}
