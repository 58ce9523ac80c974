//! # sk-tui
//!
//! Terminal stepper widget for stepper-kit.
//!
//! This crate provides the [`Stepper`](widgets::Stepper) widget and a demo
//! application that mounts it. The app communicates with the step list's
//! owning host via channels using the `Op` and `Event` protocol defined in
//! `sk-protocol`.

pub mod app;
pub mod event_handler;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;
pub use widgets::Stepper;

use anyhow::Result;
use sk_core::state::StepListManager;
use sk_protocol::Step;
use tokio::sync::mpsc::unbounded_channel;

/// Run the demo application over the given step list.
///
/// Wires the view to a [`StepListManager`] host: activations reported by
/// the view are applied to the canonical list and pushed back as
/// `Op::SetSteps`. Returns when the user quits.
pub async fn run_app(steps: Vec<Step>, vertical: bool) -> Result<()> {
    let (op_tx, op_rx) = unbounded_channel();
    let (event_tx, mut event_rx) = unbounded_channel();

    // Host task: the owning parent of the step list.
    let mut manager = StepListManager::new(steps.clone());
    let host = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(op) = manager.handle_event(&event) {
                if op_tx.send(op).is_err() {
                    break;
                }
            }
        }
    });

    let mut tui = Tui::init()?;
    let mut app = App::new(steps, vertical, event_tx, op_rx);
    let result = app.run(&mut tui).await;

    host.abort();
    tui.restore()?;
    result
}
