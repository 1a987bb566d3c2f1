//! AI-detection upload panel.
//!
//! Detection is simulated: the button starts a fixed delay and the result
//! is discarded if the file changed in the meantime.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::config::{ACCEPTED_EXTENSIONS, DETECTION_DELAY_MS};
use crate::i18n::{text, Locale};
use crate::services::DeferredTask;
use crate::state::{FileRejection, SelectionSource, UploadSession};
use crate::types::{AppError, FileDescriptor};

#[component]
pub fn DetectorUpload(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
    let session = create_rw_signal(UploadSession::new());
    let file_input = create_node_ref::<html::Input>();
    let detection = DeferredTask::new();
    detection.cancel_on_cleanup();

    let copy = move || &text(locale.get()).detector;

    // Rejected files leave the panel unchanged.
    let report = |rejection: FileRejection| {
        log::debug!("🚫 File rejected: {}", AppError::from(rejection));
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !session.with_untracked(|s| s.drag_active()) {
            session.update(|s| s.drag_enter());
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        session.update(|s| s.drag_leave());
    };

    // Selection never cancels a pending detection timer; replacing the file
    // invalidates its ticket instead.
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let candidate = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
            .map(|file| FileDescriptor::from(&file));
        if let Some(Err(rejection)) = session.try_update(|s| s.drop_file(candidate)) {
            report(rejection);
        }
    };

    let on_pick = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let picked = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| FileDescriptor::from(&file));
        input.set_value("");
        if let Some(file) = picked {
            let result = session.try_update(|s| s.select_file(file, SelectionSource::Picker));
            if let Some(Err(rejection)) = result {
                report(rejection);
            }
        }
    };

    let on_detect = {
        let detection = detection.clone();
        move |_| {
            let Some(ticket) = session.try_update(|s| s.start_detection()).flatten() else {
                return;
            };
            log::info!("🔍 Detection started");
            detection.schedule(DETECTION_DELAY_MS, move || {
                if session.try_update(|s| s.complete_detection(ticket)) == Some(true) {
                    log::info!("✅ Detection finished");
                } else {
                    log::debug!("Stale detection result dropped");
                }
            });
        }
    };

    let on_remove = move |_| {
        detection.cancel();
        session.update(|s| s.clear_file());
    };

    let has_file = move || session.with(|s| s.selected_file().is_some());

    view! {
        <div class="detector-card">
            <div
                class="dropzone"
                class:drag-active=move || session.with(|s| s.drag_active())
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=move |_| {
                    if !has_file() {
                        if let Some(input) = file_input.get() {
                            input.click();
                        }
                    }
                }
            >
                <input
                    type="file"
                    accept=ACCEPTED_EXTENSIONS.join(",")
                    class="hidden"
                    node_ref=file_input
                    on:change=on_pick
                />
                <Show
                    when=has_file
                    fallback=move || {
                        view! {
                            <div class="dropzone-empty">
                                <p class="prompt">{move || copy().upload_prompt}</p>
                                <p class="supported">{move || copy().upload_supported}</p>
                            </div>
                        }
                    }
                >
                    <div class="selected-file">
                        <span class="file-name">
                            {move || {
                                session.with(|s| s.selected_file().map(|f| f.name.clone()))
                            }}
                        </span>
                        <span class="file-size">
                            {move || {
                                session.with(|s| s.selected_file().map(|f| f.size_label()))
                            }}
                        </span>
                    </div>
                </Show>
            </div>

            <div class="detector-actions">
                <button
                    class="btn-primary detect"
                    disabled=move || !has_file() || session.with(|s| s.is_detecting())
                    on:click=on_detect
                >
                    {move || {
                        if session.with(|s| s.is_detecting()) {
                            copy().detecting
                        } else {
                            copy().detect_button
                        }
                    }}
                </button>
                <Show when=has_file fallback=|| view! {}>
                    <button class="remove" on:click=on_remove.clone()>
                        {move || copy().remove_file}
                    </button>
                </Show>
            </div>

            <ul class="detector-notes">
                {move || {
                    copy()
                        .notes
                        .iter()
                        .map(|note| view! { <li>{*note}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
