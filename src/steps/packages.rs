//! System package installation
//!
//! One non-interactive batch install over the fixed package set. apt treats
//! already-installed packages as a no-op, which is what makes the step
//! idempotent. There is no partial-dependency recovery: a non-zero exit is
//! fatal to the whole pipeline.

use crate::error::{Result, SetupError};
use crate::manifest::PACKAGES;
use crate::pipeline::{Context, Step};

pub struct DependencyInstaller;

impl Step for DependencyInstaller {
    fn name(&self) -> &'static str {
        "Installing system packages"
    }

    fn apply(&self, ctx: &Context) -> Result<()> {
        let mut args = vec!["apt-get", "install", "-y"];
        args.extend_from_slice(PACKAGES);

        let status = ctx.runner.run("sudo", &args)?;
        if status != 0 {
            return Err(SetupError::DependencyInstallFailure { status });
        }
        Ok(())
    }
}
