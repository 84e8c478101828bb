//! Display bootstrap script (`~/.xinitrc`)
//!
//! Runs when `startx` brings up the X server: turns off screen blanking and
//! power management, hides the pointer after a short idle, then replaces
//! itself with the Openbox session. The script's lifetime is the session's
//! lifetime, which is why the last line is `exec`.

use crate::error::Result;
use crate::fsutil;
use crate::pipeline::{Context, Step};

pub const XINITRC: &str = "\
#!/bin/sh
# LightBerry kiosk session. Managed by lightberry-setup; overwritten on install.
xset s off
xset -dpms
xset s noblank
unclutter -idle 0.5 -root &
exec openbox-session
";

pub struct DisplayBootstrapConfigurator;

impl Step for DisplayBootstrapConfigurator {
    fn name(&self) -> &'static str {
        "Writing display bootstrap (~/.xinitrc)"
    }

    fn apply(&self, ctx: &Context) -> Result<()> {
        fsutil::write_owned_file(&ctx.target.xinitrc, XINITRC)?;
        fsutil::set_executable(&ctx.target.xinitrc)
    }
}
