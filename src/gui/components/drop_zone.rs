// gui/components/drop_zone.rs
use crate::reader::{PathBlob, SharedBlob};
use crate::store::UploadStore;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use std::sync::Arc;

#[derive(Props, PartialEq, Clone)]
pub struct DropZoneProps {
    pub store: UploadStore,
    pub status: Signal<String>,
}

/// Hand every dropped or selected file to the store.
fn append_files(store: &UploadStore, files: Vec<FileData>) -> usize {
    let count = files.len();
    log::debug!("📥 {} file(s) handed to the store", count);
    for file in files {
        let blob: SharedBlob = Arc::new(PathBlob::with_metadata(file.path(), file.name(), file.size()));
        store.append_blob(blob);
    }
    count
}

#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut is_drag_active = use_signal(|| false);
    let mut status = props.status;
    let drop_store = props.store.clone();
    let pick_store = props.store.clone();

    rsx! {
        div { style: if is_drag_active() { "background:rgba(135,206,235,0.35); border:2px dashed #ffffff; border-radius:15px; min-height:100px; padding:15px; text-align:center;" } else { "background:rgba(135,206,235,0.15); border:2px dashed rgba(255,255,255,0.4); border-radius:15px; min-height:100px; padding:15px; text-align:center;" },
            ondragover: move |evt| {
                evt.prevent_default();
                is_drag_active.set(true);
            },
            ondragleave: move |_| is_drag_active.set(false),
            ondrop: move |evt| {
                evt.prevent_default();
                is_drag_active.set(false);
                let added = append_files(&drop_store, evt.files());
                status.set(format!("📥 Dropped {} file(s)", added));
            },
            if is_drag_active() {
                p { style: "font-size:1.1em; margin:10px 0;", "Drop the files here ..." }
            } else {
                p { style: "font-size:1.1em; margin:10px 0;", "Drag and drop files here, or pick them below." }
            }
            input {
                r#type: "file",
                multiple: true,
                style: "cursor:pointer;",
                onchange: move |evt| {
                    let added = append_files(&pick_store, evt.files());
                    status.set(format!("📥 Selected {} file(s)", added));
                },
            }
        }
    }
}
