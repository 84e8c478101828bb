//! Provisioning pipeline: ordered, fail-fast step execution
//!
//! The whole installer is one linear pass over a fixed step list. Each step
//! starts from the previous step's guaranteed post-state; the first failure
//! aborts everything that follows, and nothing already applied is rolled
//! back. Re-running the pipeline is the remediation: every step is
//! idempotent.

use console::Style;

use crate::error::Result;
use crate::runner::CommandRunner;
use crate::target::InstallationTarget;

/// Shared read-only context handed to every step.
pub struct Context<'a> {
    pub target: &'a InstallationTarget,
    pub runner: &'a dyn CommandRunner,
}

/// One provisioning step.
///
/// Steps mutate the system through `Context` only, and must converge when
/// applied repeatedly.
pub trait Step {
    /// Human-readable status line shown when the step begins.
    fn name(&self) -> &'static str;

    /// Apply the step's side effects. Any error aborts the pipeline.
    fn apply(&self, ctx: &Context) -> Result<()>;
}

/// Run the steps strictly in order, stopping at the first failure.
pub fn run(steps: &[Box<dyn Step>], ctx: &Context) -> Result<()> {
    let arrow = Style::new().cyan().bold();
    let fail = Style::new().red().bold();

    for (i, step) in steps.iter().enumerate() {
        println!(
            "{} [{}/{}] {}",
            arrow.apply_to("==>"),
            i + 1,
            steps.len(),
            step.name()
        );

        if let Err(e) = step.apply(ctx) {
            eprintln!("{} {}", fail.apply_to("xx"), step.name());
            return Err(e);
        }
    }

    Ok(())
}
