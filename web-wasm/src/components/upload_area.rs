//! アップロードエリアコンポーネント

use crate::runtime::{self, Controller};
use leptos::html;
use leptos::prelude::*;
use partnership_ai_common::intake::ACCEPT_ATTRIBUTE;
use partnership_ai_common::UploadFile;
use web_sys::{DragEvent, File, FileList};

pub(crate) fn to_upload(file: &File) -> UploadFile {
    UploadFile::new(file.name(), file.type_()).with_size(file.size() as u64)
}

/// ブラウザの FileList を共通の UploadFile に変換
fn collect_files(files: &FileList) -> Vec<UploadFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|f| to_upload(&f))
        .collect()
}

#[component]
pub fn UploadArea(controller: Controller) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let open_dialog = move || {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            runtime::process_files(controller, collect_files(&files));
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        if let Some(files) = input.files() {
            runtime::process_files(controller, collect_files(&files));
        }
        // 同じファイルを続けて選べるように
        input.set_value("");
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=move |_| open_dialog()
        >
            <div class="upload-icon">"📄"</div>
            <p>"Drag & drop a partnership agreement here"</p>
            <p class="text-muted">"Supported formats: PDF, DOC, DOCX"</p>
            <button
                class="btn btn-primary"
                on:click=move |ev| {
                    ev.stop_propagation();
                    open_dialog();
                }
            >
                "Browse Files"
            </button>
        </div>
        <input
            type="file"
            id="fileInput"
            accept=ACCEPT_ATTRIBUTE
            style="display: none"
            node_ref=file_input
            on:change=on_change
        />
    }
}
