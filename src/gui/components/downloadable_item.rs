// gui/components/downloadable_item.rs
use crate::download::DownloadableArtifact;
use crate::gui::util::format_size;
use dioxus::prelude::*;
use std::path::PathBuf;

#[derive(Props, PartialEq, Clone)]
pub struct DownloadableItemProps {
    pub artifact: DownloadableArtifact,
    pub download_dir: PathBuf,
    pub status: Signal<String>,
}

/// One committed file: a data URL link plus a button that saves it to disk.
#[component]
pub fn DownloadableItem(props: DownloadableItemProps) -> Element {
    let mut status = props.status;
    let filename = props.artifact.filename.clone();
    let href = props.artifact.data_url();
    let approx_size = format_size(props.artifact.decoded_len() as u64);
    let artifact = props.artifact.clone();
    let download_dir = props.download_dir.clone();

    rsx! {
        div { style: "display:flex; gap:10px; align-items:center; margin:4px 0; font-size:0.85em;",
            span { style: "color:#ffd700; flex:1;", "{filename}" }
            span { style: "opacity:0.7;", "{approx_size}" }
            a { href: "{href}", download: "{filename}", style: "color:#87ceeb;", "⬇️ Download" }
            button { style: "background:linear-gradient(45deg,#6f42c1,#563d7c); color:white; padding:6px 12px; border:none; border-radius:8px; cursor:pointer; font-weight:bold;",
                onclick: move |_| {
                    let artifact = artifact.clone();
                    let download_dir = download_dir.clone();
                    spawn(async move {
                        match artifact.save_into(&download_dir).await {
                            Ok(path) => status.set(format!("✅ Saved to {}", path.display())),
                            Err(e) => {
                                log::warn!("Save of '{}' failed: {}", artifact.filename, e);
                                status.set(format!("❌ Failed to save: {}", e));
                            }
                        }
                    });
                },
                "💾 Save"
            }
        }
    }
}
