use crate::config::AppConfig;
use crate::download::DownloadableArtifact;
use crate::gui::components::{
    actions::Actions, downloadable_item::DownloadableItem, drop_zone::DropZone, header::Header,
    upload_list::UploadList,
};
use crate::gui::hooks::use_store_records;
use crate::store::{RecordView, UploadStore};
use dioxus::prelude::*;

pub fn run_gui(app_config: AppConfig) {
    use dioxus::desktop::{Config, WindowBuilder};
    let enable_borderless = true; // borderless window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Drop B64")
            .with_decorations(!enable_borderless) // false => no native title/menu
            .with_resizable(true)
            .with_inner_size(dioxus::desktop::LogicalSize::new(900, 700)),
    );
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(app_config)
        .launch(App);
}

#[component]
fn App() -> Element {
    use dioxus::desktop::use_window; // access desktop window for dragging
    let desktop = use_window();
    let app_config = use_context::<AppConfig>();
    let read_mode = app_config.read_mode;
    // One store per window, owned by this component
    let store = use_hook(|| UploadStore::new(read_mode));
    let records = use_signal(Vec::<RecordView>::new);
    let downloads = use_signal(Vec::<DownloadableArtifact>::new);
    let status = use_signal(|| "Ready".to_string());

    use_store_records(store.clone(), records);

    let current_status = status.read().clone();
    let status_style = if current_status.starts_with('❌') {
        "background:#5a1f1f; color:#ff6262; border:1px solid #ff6262; padding:4px 10px; border-radius:16px; font-size:0.8em; font-weight:600;"
    } else if current_status.starts_with('⚠') {
        "background:#5a4b1f; color:#ffd857; border:1px solid #ffd857; padding:4px 10px; border-radius:16px; font-size:0.8em; font-weight:600;"
    } else {
        "background:#1f5130; color:#48ff9b; border:1px solid #48ff9b; padding:4px 10px; border-radius:16px; font-size:0.8em; font-weight:600;"
    };
    let download_dir = app_config.download_dir.clone();
    let download_dir_label = download_dir.display().to_string();
    let build_year = env!("APP_BUILD_YEAR");

    rsx! {
        // Main app container: vertical layout, fills viewport
        div { style: "height:97vh; display:flex; flex-direction:column; background:linear-gradient(135deg,#667eea 0%,#764ba2 100%); color:white; border:1px solid rgba(255,255,255,0.25); box-sizing:content-box;",
            div { style: "flex:1; overflow:auto; padding:8px; display:flex; flex-direction:column; gap:10px;",
                Header { on_drag: move |_| { let _ = desktop.window.drag_window(); }, on_close: move |_| { std::thread::spawn(|| std::process::exit(0)); } }
                DropZone { store: store.clone(), status: status }
                UploadList { records: records }
                Actions { store: store.clone(), records: records, downloads: downloads, status: status }
                div { style: "display:flex; align-items:center; gap:8px;",
                    span { style: "{status_style}", "{current_status}" }
                }
                // Committed files
                div { style: "background: rgba(255,255,255,0.1); backdrop-filter: blur(10px); padding: 12px; border-radius: 12px; border: 1px solid rgba(255,255,255,0.2);",
                    h2 { style: "margin:0 0 8px 0; color:#87ceeb; font-size:0.95em;", "📦 Downloads" }
                    p { style: "margin:0 0 6px 0; font-size:0.7em; opacity:0.7;", "Save writes to {download_dir_label}" }
                    if downloads.read().is_empty() {
                        div { style: "opacity:0.6; font-size:0.8em;", "Press Upload to turn pending files into downloads." }
                    }
                    for (index, artifact) in downloads.read().iter().cloned().enumerate() {
                        DownloadableItem { key: "{index}", artifact: artifact, download_dir: download_dir.clone(), status: status }
                    }
                }
                div { style: "margin-top:4px; text-align:left; font-size:0.7em; opacity:0.75; letter-spacing:0.5px;", "Built with Rust 🦀 and Dioxus ⚛️ · {build_year}" }
            }
        }
    }
}
