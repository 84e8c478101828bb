//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// LightBerry setup - kiosk provisioner
///
/// Provision the invoking account into a LightBerry OS kiosk.
#[derive(Parser, Debug)]
#[command(
    name = "lightberry-setup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Provision this account into a LightBerry OS kiosk",
    long_about = "Runs the full provisioning pipeline: installs the required system \
                  packages, deploys the LightBerry OS application tree into the home \
                  directory, wires the boot chain so every power-up lands in the kiosk, \
                  and writes an uninstall script that reverses the wiring.\n\n\
                  Run it from the LightBerry OS checkout, as the account that will own \
                  the kiosk (never as root). Re-running is safe and converges to the \
                  same state.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  cd lightberry-os && lightberry-setup\n\n\
                  \x1b[1m\x1b[32mRemoval:\x1b[0m\n    \
                  ~/lightberry-os/uninstall.sh"
)]
pub struct Cli {}
