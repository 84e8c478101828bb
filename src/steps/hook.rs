//! Login-shell hook installation
//!
//! Thin step wrapper over [`crate::profile`]: after it runs, `.bashrc`
//! carries exactly one current hook block, whatever the profile held before.

use crate::error::Result;
use crate::pipeline::{Context, Step};
use crate::profile;

pub struct LoginShellHookInstaller;

impl Step for LoginShellHookInstaller {
    fn name(&self) -> &'static str {
        "Installing login-shell hook (~/.bashrc)"
    }

    fn apply(&self, ctx: &Context) -> Result<()> {
        profile::install_hook(&ctx.target.bashrc)
    }
}
