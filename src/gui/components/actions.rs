// gui/components/actions.rs
use crate::download::DownloadableArtifact;
use crate::store::{RecordView, UploadStore};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ActionsProps {
    pub store: UploadStore,
    pub records: Signal<Vec<RecordView>>,
    pub downloads: Signal<Vec<DownloadableArtifact>>,
    pub status: Signal<String>,
}

#[component]
pub fn Actions(props: ActionsProps) -> Element {
    let mut downloads = props.downloads;
    let mut status = props.status;
    let commit_store = props.store.clone();
    let clear_store = props.store.clone();
    let pending = props.records.read().iter().filter(|r| r.state.is_pending()).count();
    let has_records = !props.records.read().is_empty();

    rsx! {
        div { style: "display:flex; gap:15px; flex-wrap:wrap; justify-content:center; align-items:center;",
            button { style: "background:linear-gradient(45deg,#28a745,#20c997); color:white; padding:12px 22px; border:none; border-radius:10px; cursor:pointer; font-size:1.05em; font-weight:bold; min-width:150px;",
                disabled: !has_records,
                onclick: move |_| {
                    let artifacts = commit_store.commit();
                    let failed = artifacts.iter().filter(|a| a.is_empty()).count();
                    status.set(if failed > 0 {
                        format!("⚠️ Uploaded {} file(s), {} without content", artifacts.len(), failed)
                    } else {
                        format!("✅ Uploaded {} file(s)", artifacts.len())
                    });
                    downloads.set(artifacts);
                },
                "⬆️ Upload"
            }
            button { style: "background:linear-gradient(45deg,#dc3545,#e74c3c); color:white; padding:12px 22px; border:none; border-radius:10px; cursor:pointer; font-size:1.05em; font-weight:bold; min-width:150px;",
                disabled: !has_records,
                onclick: move |_| {
                    clear_store.clear();
                    status.set("🧹 Cleared pending uploads".to_string());
                },
                "🧹 Clear"
            }
            if pending > 0 {
                span { style: "font-size:0.85em; opacity:0.8;", "📖 {pending} still reading" }
            }
        }
    }
}
