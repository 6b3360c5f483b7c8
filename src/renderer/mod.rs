//! External renderer invocation
//!
//! Rendering is delegated to the Inkscape executable on the search path.
//! Each invocation is synchronous; the process is spawned, waited on, and
//! its exit status reported back as a [`RenderOutcome`]. A failed render
//! never aborts the batch.

mod command;

pub use command::RenderPlan;

use std::io;
use std::process::{Command, ExitStatus};

/// Name of the renderer executable, resolved via the search path
pub const RENDERER_BIN: &str = "inkscape";

/// Result of one renderer invocation
#[derive(Debug)]
pub enum RenderOutcome {
    /// The renderer exited with status zero
    Success,
    /// The renderer ran but exited with a non-zero status
    Failed(ExitStatus),
    /// The renderer could not be spawned at all
    Launch(io::Error),
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderOutcome::Success)
    }
}

/// Run one plan to completion, blocking until the renderer exits
pub fn render(plan: &RenderPlan) -> RenderOutcome {
    match Command::new(RENDERER_BIN).args(plan.command_args()).status() {
        Ok(status) if status.success() => RenderOutcome::Success,
        Ok(status) => RenderOutcome::Failed(status),
        Err(err) => RenderOutcome::Launch(err),
    }
}
