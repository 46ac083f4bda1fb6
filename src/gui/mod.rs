// gui/mod.rs
// GUI module root for drop-b64

pub mod util;
mod components {
    pub mod actions;
    pub mod downloadable_item;
    pub mod drop_zone;
    pub mod header;
    pub mod upload_list;
}
pub mod dioxus_app; // main app
pub mod hooks;
