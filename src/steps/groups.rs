//! Hardware group membership grants
//!
//! Adds the account to the device-access groups via sudo/usermod.
//! Already-held memberships are a no-op for usermod. A failure here is
//! fatal but deferred in impact: the kiosk only loses device access at the
//! next session start, not immediately.

use crate::error::{Result, SetupError};
use crate::manifest::HARDWARE_GROUPS;
use crate::pipeline::{Context, Step};

pub struct PermissionGrantor;

impl Step for PermissionGrantor {
    fn name(&self) -> &'static str {
        "Granting hardware group memberships"
    }

    fn apply(&self, ctx: &Context) -> Result<()> {
        let groups = HARDWARE_GROUPS.join(",");
        let status = ctx.runner.run(
            "sudo",
            &["usermod", "-a", "-G", &groups, &ctx.target.user],
        )?;

        if status != 0 {
            return Err(SetupError::PermissionGrantFailure { status });
        }
        Ok(())
    }
}
