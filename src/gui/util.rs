// gui/util.rs
// Utility helpers for GUI

use crate::store::UploadState;

/// Human readable byte count, e.g. `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Label and badge style for a record state.
pub fn state_badge(state: UploadState) -> (&'static str, &'static str) {
    match state {
        UploadState::Added => (
            "⏳ Added",
            "background:#5a4b1f; color:#ffd857; border:1px solid #ffd857; padding:2px 8px; border-radius:12px; font-size:0.75em;",
        ),
        UploadState::Reading => (
            "📖 Reading",
            "background:#1f3f5a; color:#87ceeb; border:1px solid #87ceeb; padding:2px 8px; border-radius:12px; font-size:0.75em;",
        ),
        UploadState::Ready => (
            "✅ Ready",
            "background:#1f5130; color:#48ff9b; border:1px solid #48ff9b; padding:2px 8px; border-radius:12px; font-size:0.75em;",
        ),
        UploadState::Failed => (
            "❌ Failed",
            "background:#5a1f1f; color:#ff6262; border:1px solid #ff6262; padding:2px 8px; border-radius:12px; font-size:0.75em;",
        ),
    }
}
