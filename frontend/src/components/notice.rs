//! Banner shown once the download has been handed to the browser.

use leptos::*;

#[component]
pub fn DeletionNotice() -> impl IntoView {
    view! {
        <div class="deletion-notice mx-4 mt-4">
            <div class="bg-green-50 border-l-4 border-green-400 p-4 rounded">
                <h3 class="text-sm font-medium text-green-800">"Download Complete"</h3>
                <p class="mt-2 text-sm text-green-700">
                    "Your file has been downloaded successfully. For security and privacy reasons, "
                    "the files have been automatically deleted from our servers."
                </p>
            </div>
        </div>
    }
}
