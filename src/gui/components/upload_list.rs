// gui/components/upload_list.rs
use crate::gui::util::{format_size, state_badge};
use crate::store::RecordView;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct UploadListProps {
    pub records: Signal<Vec<RecordView>>,
}

#[component]
pub fn UploadList(props: UploadListProps) -> Element {
    // (key, filename, size, badge label, badge style)
    let rows: Vec<(u64, String, String, &'static str, &'static str)> = props
        .records
        .read()
        .iter()
        .map(|r| {
            let (label, style) = state_badge(r.state);
            (r.id.0, r.filename.clone(), format_size(r.size_bytes), label, style)
        })
        .collect();
    let count = rows.len();
    let is_empty = rows.is_empty();

    rsx! {
        div { style: "background: rgba(255,255,255,0.1); backdrop-filter: blur(10px); padding: 12px; border-radius: 12px; border: 1px solid rgba(255,255,255,0.2);",
            h2 { style: "margin:0 0 8px 0; color:#90ee90; font-size:0.95em;", "📋 Pending uploads (count={count})" }
            if is_empty {
                div { style: "opacity:0.6; font-size:0.8em;", "Nothing dropped yet." }
            }
            for (key, filename, size, label, style) in rows {
                div { key: "{key}", style: "display:flex; gap:10px; align-items:center; margin:3px 0; font-size:0.85em;",
                    span { style: "color:#ffd700; flex:1; overflow:hidden; text-overflow:ellipsis;", "{filename}" }
                    span { style: "opacity:0.8;", "{size}" }
                    span { style: "{style}", "{label}" }
                }
            }
        }
    }
}
