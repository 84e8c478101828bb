//! The provisioning steps, in pipeline order
//!
//! The install pipeline:
//! 1. Refuse to run as root
//! 2. Install the system package set
//! 3. Deploy the application tree
//! 4. Write the display bootstrap script (`.xinitrc`)
//! 5. Write the Openbox autostart hook
//! 6. Install the login-shell hook into `.bashrc`
//! 7. Grant hardware group memberships
//! 8. Write the uninstall script

pub mod autostart;
pub mod deploy;
pub mod display;
pub mod groups;
pub mod hook;
pub mod packages;
pub mod privilege;
pub mod uninstaller;

use crate::pipeline::Step;

/// The full install pipeline, leaf dependencies first.
pub fn install_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(privilege::PrivilegeGuard),
        Box::new(packages::DependencyInstaller),
        Box::new(deploy::FileDeployer),
        Box::new(display::DisplayBootstrapConfigurator),
        Box::new(autostart::SessionAutostartConfigurator),
        Box::new(hook::LoginShellHookInstaller),
        Box::new(groups::PermissionGrantor),
        Box::new(uninstaller::UninstallArtifactGenerator),
    ]
}
