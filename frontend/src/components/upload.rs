//! Upload dashboard: file selection with drag & drop, submission, progress.
//!
//! Holds the selection for the lifetime of the page. Errors never clear it,
//! so the user can fix the cause and submit again.

use leptos::*;
use web_sys::File;

use crate::components::{DropZone, ErrorBanner, FileList, ProgressSection};
use crate::services::{csrf_token, follow_progress, navigate, upload_files};
use crate::state::{ProgressSnapshot, Selection, UploadPhase};
use crate::{AppResult, FileEntry};

#[component]
pub fn UploadPanel(
    /// Upload endpoint from the mount element's `data-dashboard-url`
    endpoint: String,
) -> impl IntoView {
    let selection = create_rw_signal(Selection::<File>::new());
    let (phase, set_phase) = create_signal(UploadPhase::Idle);
    let (progress, set_progress) = create_signal(ProgressSnapshot::uploading());
    let (error, set_error) = create_signal(None::<String>);
    let input_ref = create_node_ref::<html::Input>();
    let endpoint = store_value(endpoint);

    suppress_page_drops();

    let settle_phase = move || {
        let count = selection.with_untracked(Selection::len);
        set_phase.set(UploadPhase::for_selection(count));
    };

    let on_files = move |files: Vec<File>| {
        if phase.get_untracked().is_busy() || files.is_empty() {
            return;
        }
        set_error.set(None);

        let incoming: Vec<FileEntry<File>> = files.into_iter().map(FileEntry::from).collect();
        let count = incoming.len();
        match selection.try_update(|s| s.add_files(incoming)) {
            Some(Ok(())) => {
                log::info!("📎 Added {} file(s)", count);
                settle_phase();
            }
            Some(Err(e)) => {
                log::warn!("Selection rejected: {}", e);
                set_error.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    let on_remove = move |index: usize| {
        selection.update(|s| {
            s.remove_file(index);
        });
        settle_phase();
    };

    let on_clear = move |_| {
        selection.update(Selection::clear_all);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
        set_error.set(None);
        set_phase.set(UploadPhase::Idle);
    };

    let on_submit = move |_| {
        if phase.get_untracked().is_busy() {
            return;
        }

        let files = match selection.with_untracked(Selection::contents_for_submit) {
            Ok(files) => files,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let token = match csrf_token() {
            Ok(token) => token,
            Err(e) => {
                log::error!("{}", e);
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_progress.set(ProgressSnapshot::uploading());
        set_phase.set(UploadPhase::Submitting);

        let endpoint = endpoint.get_value();
        spawn_local(async move {
            match submit_and_follow(&files, &token, &endpoint, set_phase, set_progress).await {
                Ok(redirect_url) => {
                    set_phase.set(UploadPhase::Redirecting);
                    navigate(&redirect_url);
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    settle_phase();
                }
            }
        });
    };

    let busy = move || phase.with(UploadPhase::is_busy);
    let has_files = move || selection.with(|s| !s.is_empty());

    view! {
        <div class="upload-section">
            <Show
                when=move || !busy()
                fallback=move || view! { <ProgressSection progress=progress/> }
            >
                <DropZone on_files=on_files input_ref=input_ref/>

                <Show
                    when=has_files
                    fallback=|| view! { }
                >
                    <div class="file-list" id="fileList">
                        <h3 class="file-list-title">"Selected Files"</h3>
                        <FileList selection=selection on_remove=on_remove/>
                    </div>
                </Show>

                // Stays mounted with an empty selection so submit can say why
                <div class="file-actions">
                    <button type="button" id="clearButton" class="clear-button" on:click=on_clear>
                        "Clear All"
                    </button>
                    <button type="button" id="uploadButton" class="upload-button" on:click=on_submit>
                        "Compress Files"
                    </button>
                </div>
            </Show>

            <ErrorBanner error=error/>
        </div>
    }
}

/// Sends the batch and reports progress until the server has a result page.
async fn submit_and_follow(
    files: &[File],
    csrf_token: &str,
    endpoint: &str,
    set_phase: WriteSignal<UploadPhase>,
    set_progress: WriteSignal<ProgressSnapshot>,
) -> AppResult<String> {
    let accepted = upload_files(files, csrf_token, endpoint).await?.into_result()?;
    log::info!("✅ Upload accepted");

    set_phase.set(UploadPhase::Progressing);
    follow_progress(accepted, move |snapshot| set_progress.set(snapshot)).await
}

/// Stops the browser from opening files dropped outside the drop zone.
fn suppress_page_drops() {
    let on_dragover = window_event_listener(ev::dragover, |e| e.prevent_default());
    let on_drop = window_event_listener(ev::drop, |e| e.prevent_default());
    on_cleanup(move || {
        on_dragover.remove();
        on_drop.remove();
    });
}
