//! Main entry point for the `stepper` binary.
//!
//! Loads a step list (from a file, or a built-in demo list), sets up
//! logging, and launches the TUI. Load failures are reported before any
//! terminal mode change.

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::eyre;
use colored::Colorize;
use sk_protocol::Step;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Terminal stepper widget demo.
#[derive(Parser, Debug)]
#[command(name = "stepper", version, about)]
struct Args {
    /// Path to a YAML or JSON step list file. Without it, a built-in demo
    /// list is shown.
    steps_file: Option<PathBuf>,

    /// Render the stepper vertically.
    #[arg(long)]
    vertical: bool,

    /// Append tracing output to this file. The terminal runs in raw mode,
    /// so logs never go to stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let _guard = init_logging(args.log_file.as_deref())?;

    let steps = match &args.steps_file {
        Some(path) => match sk_core::config::load_steps(path) {
            Ok(steps) => steps,
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                std::process::exit(1);
            }
        },
        None => demo_steps(),
    };

    tracing::info!(count = steps.len(), vertical = args.vertical, "starting stepper");
    sk_tui::run_app(steps, args.vertical)
        .await
        .map_err(|e| eyre!(e))
}

/// The built-in demo list: one step in each state.
fn demo_steps() -> Vec<Step> {
    vec![
        Step::new("Checkout").completed(true),
        Step::new("Build").in_processing(true),
        Step::new("Test").error(true),
        Step::new("Deploy").active(true),
        Step::new("Announce"),
    ]
}

/// Initialize the tracing subscriber.
///
/// With `--log-file`, a non-blocking file appender is installed and its
/// guard returned; the guard must live until exit so buffered logs flush.
/// Without it, tracing stays unsubscribed (the terminal owns the screen).
fn init_logging(log_file: Option<&Path>) -> color_eyre::Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("--log-file must name a file"))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    Ok(Some(guard))
}
