//! External process execution seam
//!
//! The package manager and the privilege-escalation tool are the only
//! collaborators the installer shells out to. They sit behind a trait so the
//! steps stay testable without touching the real system.

use std::process::Command;

use crate::error::{Result, SetupError};

/// Runs an external command to completion and reports its exit status.
pub trait CommandRunner {
    /// Run `program` with `args`, inheriting stdio, and return the exit code.
    ///
    /// `Err` means the process could not be spawned at all; a non-zero exit
    /// code is returned as `Ok` and judged by the caller.
    fn run(&self, program: &str, args: &[&str]) -> Result<i32>;
}

/// Production runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<i32> {
        let status = Command::new(program).args(args).status().map_err(|e| {
            SetupError::CommandSpawnFailed {
                program: program.to_string(),
                reason: e.to_string(),
            }
        })?;

        // Terminated-by-signal has no code; treat it as a generic failure.
        Ok(status.code().unwrap_or(-1))
    }
}
