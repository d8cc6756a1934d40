//! Rows for the staged files with their remove buttons.

use leptos::*;
use web_sys::File;

use crate::format::format_file_size;
use crate::state::Selection;

#[component]
pub fn FileList(
    selection: RwSignal<Selection<File>>,
    /// Called with the row index to remove
    #[prop(into)]
    on_remove: Callback<usize>,
) -> impl IntoView {
    let rows = move || {
        selection.with(|s| {
            s.entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let name = entry.name.clone();
                    let size = format_file_size(entry.size);
                    view! {
                        <div class="file-item">
                            <div class="file-info">
                                <p class="file-name">{name}</p>
                                <p class="file-size">{size}</p>
                            </div>
                            <button
                                type="button"
                                class="remove-file-btn"
                                data-index=index.to_string()
                                on:click=move |_| on_remove.call(index)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div id="fileItems" class="file-items">
            {rows}
            <div class="file-total">{move || selection.with(Selection::total_label)}</div>
        </div>
    }
}
