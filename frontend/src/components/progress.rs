use leptos::*;
use crate::state::ProgressSnapshot;

#[component]
pub fn ProgressSection(progress: ReadSignal<ProgressSnapshot>) -> impl IntoView {
    view! {
        <div class="progress-section show" id="progressSection">
            <p class="progress-text" id="progressText">
                {move || progress.with(|p| p.label.clone())}
            </p>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    id="progressBar"
                    style:width=move || progress.with(ProgressSnapshot::width)
                ></div>
            </div>
        </div>
    }
}
