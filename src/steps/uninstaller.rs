//! Uninstall script generation
//!
//! Writes a self-contained POSIX sh script into the application root that
//! reverses the boot-chain wiring: drops the `.bashrc` hook block, removes
//! the Openbox config directory, the `.xinitrc` script, and finally the
//! application root itself. Group memberships are intentionally left in
//! place.
//!
//! The app root is removed last: the script deletes its own containing
//! directory, and on Linux the open file descriptor keeps the running script
//! readable after the unlink. The script exits right after its completion
//! message.

use crate::error::Result;
use crate::fsutil;
use crate::manifest::APP_DIR_NAME;
use crate::pipeline::{Context, Step};
use crate::profile::{HOOK_BEGIN, HOOK_END};

pub fn uninstall_script() -> String {
    format!(
        "#!/bin/sh\n\
         # Removes the LightBerry kiosk wiring installed by lightberry-setup.\n\
         set -u\n\
         \n\
         echo \"Removing LightBerry kiosk...\"\n\
         \n\
         if [ -f \"$HOME/.bashrc\" ]; then\n\
         \x20\x20\x20\x20sed -i '/^{HOOK_BEGIN}$/,/^{HOOK_END}$/d' \"$HOME/.bashrc\"\n\
         fi\n\
         rm -rf \"$HOME/.config/openbox\"\n\
         rm -f \"$HOME/.xinitrc\"\n\
         rm -rf \"$HOME/{APP_DIR_NAME}\"\n\
         \n\
         echo \"LightBerry kiosk removed. Group memberships are left in place.\"\n"
    )
}

pub struct UninstallArtifactGenerator;

impl Step for UninstallArtifactGenerator {
    fn name(&self) -> &'static str {
        "Writing uninstall script"
    }

    fn apply(&self, ctx: &Context) -> Result<()> {
        let path = ctx.target.app_root.join(crate::manifest::UNINSTALL_SCRIPT);
        fsutil::write_owned_file(&path, &uninstall_script())?;
        fsutil::set_executable(&path)
    }
}
