//! Openbox autostart hook
//!
//! Openbox runs this script once when the session is up. X readiness is not
//! signaled to autostart hooks, so a short fixed sleep stands in for a
//! readiness signal before the kiosk application grabs the display. The
//! application is launched detached, with stdout and stderr captured to the
//! log file inside the application root.

use crate::error::Result;
use crate::fsutil;
use crate::manifest::{APP_DIR_NAME, APP_ENTRY_POINT, KIOSK_LOG};
use crate::pipeline::{Context, Step};

/// Seconds to let the display settle before launching the application.
pub const DISPLAY_SETTLE_SECS: u32 = 2;

pub fn autostart_content() -> String {
    format!(
        "# LightBerry kiosk autostart. Managed by lightberry-setup; overwritten on install.\n\
         sleep {DISPLAY_SETTLE_SECS}\n\
         cd \"$HOME/{APP_DIR_NAME}\" || exit 1\n\
         python3 {APP_ENTRY_POINT} > {KIOSK_LOG} 2>&1 &\n"
    )
}

pub struct SessionAutostartConfigurator;

impl Step for SessionAutostartConfigurator {
    fn name(&self) -> &'static str {
        "Writing Openbox autostart hook"
    }

    fn apply(&self, ctx: &Context) -> Result<()> {
        fsutil::ensure_dir(&ctx.target.openbox_dir)?;
        fsutil::write_owned_file(&ctx.target.autostart, &autostart_content())
    }
}
