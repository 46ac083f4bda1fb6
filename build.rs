use std::env;
use std::process::Command;
use time::OffsetDateTime;

// Stamps APP_BUILD_YEAR and APP_VERSION_DISPLAY for the GUI header and --version.
fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

    let build_year = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|epoch| OffsetDateTime::from_unix_timestamp(epoch).ok())
        .map(|dt| dt.year())
        .unwrap_or_else(|| OffsetDateTime::now_utc().year());
    println!("cargo:rustc-env=APP_BUILD_YEAR={build_year}");

    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let display_version = if env::var("PROFILE").as_deref() == Ok("release") || on_release_tag(&version) {
        version
    } else {
        format!("{version}-dev")
    };
    println!("cargo:rustc-env=APP_VERSION_DISPLAY={display_version}");
}

/// True when HEAD is exactly the `v<version>` tag.
fn on_release_tag(version: &str) -> bool {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    let expected = format!("v{version}");
    Command::new("git")
        .args(["describe", "--tags", "--exact-match"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .is_some_and(|tag| tag.trim() == expected)
}
