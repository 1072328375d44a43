use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tag_next::cli::{self, Invocation};
use tag_next::{ui, TagNextError};

/// Environment variable holding the log filter, e.g. `TAG_NEXT_LOG=debug`.
const LOG_ENV: &str = "TAG_NEXT_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let options = match cli::parse_invocation(std::env::args_os())? {
        Invocation::Run(options) => options,
        Invocation::Info(text) => {
            ui::display_info(&text);
            return Ok(());
        }
    };
    tracing::debug!(?options, "parsed options");

    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let result = cli::run_workflow(&options, &cwd)?;

    ui::display_resolution(&result.resolution, result.verbose);
    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        ui::display_error(&format!("{:#}", err));
        let code = err
            .downcast_ref::<TagNextError>()
            .map(TagNextError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
