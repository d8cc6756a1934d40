//! Inline error banner shared by the dashboard flows.

use leptos::*;

#[component]
pub fn ErrorBanner(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show
            when=move || error.with(Option::is_some)
            fallback=|| view! { }
        >
            <div class="error-message" id="errorMessages" role="alert">
                <p id="errorText">{move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
