//! Results page controls: one-shot download and copy-link.
//!
//! The download itself is a plain link handled by the browser. The server
//! deletes the file when it is served, so the control locks after the first
//! click and later says so.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::components::DeletionNotice;
use crate::config::{COPY_FEEDBACK_MS, DOWNLOAD_NOTICE_DELAY_MS, DOWNLOAD_URL_ATTR};
use crate::services::copy_text;
use crate::state::{CopyState, DownloadState};

const COPY_LABEL: &str = "Copy Link";

#[component]
pub fn ResultsPanel(
    /// Download URL from the mount element's `data-download-url`
    download_url: String,
    /// Compressed file name, when the page provides one
    filename: Option<String>,
) -> impl IntoView {
    let (download, set_download) = create_signal(DownloadState::Ready);
    let (copy, set_copy) = create_signal(CopyState::Idle);

    let on_download = move |ev: MouseEvent| {
        let mut state = download.get_untracked();
        if !state.start() {
            ev.prevent_default();
            return;
        }
        set_download.set(state);
        log::info!("⬇️  Download started");

        spawn_local(async move {
            TimeoutFuture::new(DOWNLOAD_NOTICE_DELAY_MS).await;
            set_download.update(DownloadState::finish);
        });
    };

    let on_copy = move |ev: MouseEvent| {
        if download.get_untracked().is_locked() || !copy.get_untracked().accepts_click() {
            return;
        }

        let Some(url) = button_download_url(&ev) else {
            log::warn!("Copy link control has no {}", DOWNLOAD_URL_ATTR);
            return;
        };

        set_copy.set(CopyState::Copying);
        spawn_local(async move {
            let state = match copy_text(&url).await {
                Ok(()) => CopyState::Copied,
                Err(e) => {
                    log::error!("{}", e);
                    CopyState::Failed
                }
            };
            set_copy.set(state);
            TimeoutFuture::new(COPY_FEEDBACK_MS).await;
            set_copy.set(CopyState::Idle);
        });
    };

    let locked = move || download.with(DownloadState::is_locked);
    let heading = match filename {
        Some(name) => format!("{} is ready", name),
        None => "Your file is ready".to_string(),
    };

    view! {
        <div class="results-panel">
            <div class="results-header">
                <h2 class="results-title">{heading}</h2>
                <p class="results-hint">"The file can be downloaded once, then it is removed from our servers."</p>
            </div>

            <Show
                when=move || download.with(DownloadState::show_notice)
                fallback=|| view! { }
            >
                <DeletionNotice/>
            </Show>

            <div class="results-actions">
                <a
                    id="downloadButton"
                    href=download_url.clone()
                    class=move || download.with(DownloadState::css_class)
                    style:pointer-events=move || if locked() { "none" } else { "auto" }
                    on:click=on_download
                >
                    <span>{move || download.with(DownloadState::label)}</span>
                </a>

                <button
                    type="button"
                    id="copyLinkButton"
                    data-download-url=download_url
                    disabled=locked
                    class=move || {
                        let class = copy.with(CopyState::css_class);
                        if locked() {
                            format!("{} opacity-50 cursor-not-allowed", class)
                        } else {
                            class.to_string()
                        }
                    }
                    style:pointer-events=move || if locked() { "none" } else { "auto" }
                    on:click=on_copy
                >
                    <span>{move || copy.with(|c| c.label(COPY_LABEL))}</span>
                </button>
            </div>
        </div>
    }
}

/// `data-download-url` of the button that was clicked.
fn button_download_url(ev: &MouseEvent) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("button").ok().flatten())
        .and_then(|button| button.get_attribute(DOWNLOAD_URL_ATTR))
}
