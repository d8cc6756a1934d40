//! Drop target and hidden file picker.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::files_from_list;

#[component]
pub fn DropZone(
    /// Receives every batch dropped or picked
    #[prop(into)]
    on_files: Callback<Vec<File>>,
    /// The hidden `<input type="file">`, reset by the parent on clear
    input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let (highlighted, set_highlighted) = create_signal(false);

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_highlighted.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_highlighted.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_highlighted.set(false);

        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files.call(files_from_list(&list));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            on_files.call(files_from_list(&list));
        }
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            id="dropZone"
            class=move || {
                if highlighted.get() {
                    "drop-zone border-[#3d98f4] bg-[#f8fafc]"
                } else {
                    "drop-zone"
                }
            }
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"📦"</div>
            <p class="upload-text">"Drag and drop files here"</p>
            <p class="upload-hint">"or browse, up to 50MB in total"</p>

            <input
                type="file"
                id="fileInput"
                multiple
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
            />

            <button type="button" id="browseButton" class="upload-button" on:click=open_picker>
                "Browse Files"
            </button>
        </div>
    }
}
