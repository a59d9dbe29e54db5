use clap::Parser;
use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use fieldlogic_launcher::link::deep_link;
use fieldlogic_launcher::request::DEFAULT_START_OFFSET;
use fieldlogic_launcher::{Config, ConfigOverrides, Launcher, LauncherError, SystemSpawner};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Opens fieldlogic:// links in an external media player",
    long_about = None
)]
struct Args {
    /// Link to open, e.g. fieldlogic://open?file=interview_01.webm&t=15.1
    #[arg(index = 1)]
    uri: Option<String>,

    /// Player executable (overrides config and FIELDLOGIC_PLAYER_PATH)
    #[arg(long, value_name = "PATH")]
    player: Option<PathBuf>,

    /// Directory recordings are resolved against (overrides FIELDLOGIC_MEDIA_ROOT)
    #[arg(long, value_name = "DIR")]
    media_root: Option<PathBuf>,

    /// Print the player command without starting it
    #[arg(long)]
    dry_run: bool,

    /// Print a fieldlogic:// link for FILE instead of opening one
    #[arg(long, value_name = "FILE", conflicts_with = "uri")]
    link: Option<String>,

    /// Start offset in seconds for --link
    #[arg(short = 't', long = "time", value_name = "SECONDS", requires = "link")]
    time: Option<String>,
}

fn main() {
    // Use RUST_LOG env var if set; stdout is reserved for the launch line
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() {
                LauncherError::Usage.exit_code()
            } else {
                0
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(args) {
        match &e {
            LauncherError::Usage => say(&e),
            _ => say(format!("Error: {}", e)),
        }
        std::process::exit(e.exit_code());
    }
}

/// Write a line to stdout. A closed stdout is ignored, as in `Launcher::launch`.
fn say(line: impl Display) {
    let _ = writeln!(std::io::stdout(), "{}", line);
}

fn run(args: Args) -> Result<(), LauncherError> {
    if let Some(file) = args.link {
        if file.is_empty() {
            return Err(LauncherError::MissingFilename);
        }
        let start = args.time.as_deref().unwrap_or(DEFAULT_START_OFFSET);
        say(deep_link(&file, start));
        return Ok(());
    }

    debug!("Invoked with {:?}", args.uri);

    let config = Config::load(ConfigOverrides {
        player_path: args.player,
        media_root: args.media_root,
    })?;

    let launcher = Launcher::new(config, SystemSpawner).with_dry_run(args.dry_run);
    let stdout = std::io::stdout();
    launcher.run(args.uri.as_deref(), &mut stdout.lock())?;

    Ok(())
}
