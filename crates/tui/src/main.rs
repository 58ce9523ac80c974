//! Main entry point for the sk-tui binary.
//!
//! This executable runs the stepper demo with a built-in step list; the
//! `stepper` binary in `sk-cli` is the full entry point with file loading
//! and logging options.

use anyhow::Result;
use sk_protocol::Step;

#[tokio::main]
async fn main() -> Result<()> {
    let steps = vec![
        Step::new("Checkout").completed(true),
        Step::new("Build").in_processing(true),
        Step::new("Test"),
        Step::new("Deploy"),
    ];
    sk_tui::run_app(steps, false).await
}
