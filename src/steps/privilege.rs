//! Pre-flight privilege guard
//!
//! Later steps escalate selectively with sudo. Running the whole installer
//! as root would scatter root-owned files through the account's home
//! directory, so an elevated identity is rejected before anything mutates.

use nix::unistd::geteuid;

use crate::error::{Result, SetupError};
use crate::pipeline::{Context, Step};

pub struct PrivilegeGuard;

impl Step for PrivilegeGuard {
    fn name(&self) -> &'static str {
        "Checking privileges"
    }

    fn apply(&self, _ctx: &Context) -> Result<()> {
        ensure_unprivileged(geteuid().as_raw())
    }
}

fn ensure_unprivileged(euid: u32) -> Result<()> {
    if euid == 0 {
        return Err(SetupError::PrivilegeViolation);
    }
    Ok(())
}
