use drop_b64::args::{Args, Mode};
use drop_b64::cli::{encode_files, format_line};
use drop_b64::config::AppConfig;
use drop_b64::gui::dioxus_app::run_gui;

fn main() {
    let Some(args) = Args::parse() else {
        return;
    };

    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = AppConfig::from_args(&args);
    log::debug!("Config: {:?}", config);

    match args.mode {
        Mode::Encode(files) => {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("❌ Failed to start async runtime: {e}");
                    std::process::exit(1);
                }
            };
            let artifacts = rt.block_on(encode_files(&files, config.read_mode));
            let failed = artifacts.iter().filter(|a| a.is_empty()).count();
            for artifact in &artifacts {
                println!("{}", format_line(artifact));
            }
            if failed > 0 {
                eprintln!("⚠️ {} of {} files produced no content", failed, artifacts.len());
            }
        }
        Mode::Gui => {
            println!("🚀 Launching Drop B64 GUI (saving to {})...", config.download_dir.display());
            run_gui(config);
        }
    }
}
