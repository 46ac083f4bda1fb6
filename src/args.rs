use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Gui,
    /// Headless: encode the given files and print one line per artifact.
    Encode(Vec<PathBuf>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    pub data_url: bool,
    pub download_dir: Option<PathBuf>,
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Run(Args),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("--encode needs at least one file")]
    MissingFiles,

    #[error("{0} needs a value")]
    EmptyValue(&'static str),
}

impl Args {
    /// Parse the process arguments. Prints help, version or errors itself
    /// and returns `None` when there is nothing left to run.
    pub fn parse() -> Option<Self> {
        match Self::parse_from(env::args().skip(1)) {
            Ok(ParseOutcome::Run(args)) => Some(args),
            Ok(ParseOutcome::Help) => {
                print_help();
                None
            }
            Ok(ParseOutcome::Version) => {
                println!(
                    "Drop B64 v{} (built {})",
                    env!("APP_VERSION_DISPLAY"),
                    env!("APP_BUILD_YEAR")
                );
                None
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                print_help();
                None
            }
        }
    }

    /// Parse arguments, program name excluded.
    pub fn parse_from<I>(args: I) -> Result<ParseOutcome, ArgsError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut encode: Option<Vec<PathBuf>> = None;
        let mut data_url = false;
        let mut download_dir: Option<PathBuf> = None;
        let mut debug = false;

        for arg in args {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                return Ok(ParseOutcome::Help);
            } else if arg == "--version" || arg == "-v" {
                return Ok(ParseOutcome::Version);
            } else if arg == "--gui" {
                encode = None;
            } else if arg == "--encode" || arg == "-e" {
                encode = Some(Vec::new());
            } else if arg == "--data-url" {
                data_url = true;
            } else if arg == "--debug" {
                debug = true;
            } else if let Some(dir) = arg.strip_prefix("--download-dir=") {
                if dir.is_empty() {
                    return Err(ArgsError::EmptyValue("--download-dir"));
                }
                download_dir = Some(PathBuf::from(dir));
            } else if !arg.starts_with('-')
                && let Some(files) = encode.as_mut()
            {
                files.push(PathBuf::from(arg));
            } else {
                return Err(ArgsError::UnknownArgument(arg));
            }
        }

        let mode = match encode {
            Some(files) if files.is_empty() => return Err(ArgsError::MissingFiles),
            Some(files) => Mode::Encode(files),
            None => Mode::Gui,
        };
        Ok(ParseOutcome::Run(Args {
            mode,
            data_url,
            download_dir,
            debug,
        }))
    }
}

fn print_help() {
    println!("📂 Drop B64 - drag-and-drop base64 file picker");
    println!();
    println!("USAGE:");
    println!("    drop-b64 [FLAGS] [--encode <FILE>...]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)            Launch GUI interface");
    println!("    --gui                 Launch GUI interface");
    println!("    --encode, -e <FILE>.. Encode files and print 'name<TAB>base64' lines");
    println!("    --data-url            Read files as data URLs instead of raw bytes");
    println!("    --download-dir=DIR    Folder used by the Save buttons");
    println!("                          (default: $DROP_B64_DOWNLOAD_DIR, then ~/Downloads)");
    println!("    --debug               Enable debug logging");
    println!("    --help, -h            Show this help message");
    println!("    --version, -v         Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    drop-b64");
    println!("    drop-b64 --download-dir=/tmp/out");
    println!("    drop-b64 --encode photo.png notes.txt");
}
