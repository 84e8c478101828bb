//! LightBerry setup - kiosk provisioner
//!
//! Turns a stock Raspberry Pi OS account into a dedicated LightBerry OS
//! kiosk: installs the system packages, deploys the application tree, wires
//! the boot chain (xinit script, Openbox autostart, login-shell hook) and
//! writes an uninstall script that reverses the wiring.

use clap::Parser;

mod cli;
mod error;
mod fsutil;
mod manifest;
mod pipeline;
mod profile;
mod progress;
mod runner;
mod steps;
mod target;

use cli::Cli;
use console::Style;
use error::Result;
use pipeline::Context;
use runner::SystemRunner;
use target::InstallationTarget;

fn run() -> Result<()> {
    let target = InstallationTarget::resolve()?;
    let runner = SystemRunner;
    let ctx = Context {
        target: &target,
        runner: &runner,
    };

    pipeline::run(&steps::install_steps(), &ctx)?;

    println!(
        "\n{} Reboot to start the kiosk. Remove it later with {}",
        Style::new().green().bold().apply_to("Provisioning complete."),
        Style::new()
            .cyan()
            .apply_to(target.app_root.join(manifest::UNINSTALL_SCRIPT).display()),
    );

    Ok(())
}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!(
            "\n{} {}",
            Style::new().red().bold().apply_to("Provisioning failed:"),
            e
        );
        std::process::exit(1);
    }
}
