//! Installation target resolution
//!
//! All paths the pipeline touches derive from the invoking account's home
//! directory and are resolved exactly once, before the first step runs.

use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::manifest;

/// The resolved account the kiosk is provisioned into.
///
/// Read-only for the lifetime of one invocation; every step takes its paths
/// from here instead of consulting the environment again.
#[derive(Debug, Clone)]
pub struct InstallationTarget {
    /// Account home directory
    pub home: PathBuf,
    /// Invoking account name (for group membership grants)
    pub user: String,
    /// Checkout directory the payload is copied from
    pub payload_dir: PathBuf,
    /// Application root: `$HOME/lightberry-os`
    pub app_root: PathBuf,
    /// Display bootstrap script: `$HOME/.xinitrc`
    pub xinitrc: PathBuf,
    /// Openbox per-account config dir: `$HOME/.config/openbox`
    pub openbox_dir: PathBuf,
    /// Openbox autostart hook: `$HOME/.config/openbox/autostart`
    pub autostart: PathBuf,
    /// Login profile carrying the shell hook: `$HOME/.bashrc`
    pub bashrc: PathBuf,
}

impl InstallationTarget {
    /// Resolve the target from the invoking account's environment.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or(SetupError::HomeDirUnavailable)?;

        let user = std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .unwrap_or_else(|_| "pi".to_string());

        let payload_dir = std::env::current_dir().map_err(|e| SetupError::FileReadFailed {
            path: ".".into(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_parts(&home, &user, &payload_dir))
    }

    /// Derive all paths from explicit parts. Used by `resolve` and by tests.
    pub fn from_parts(home: &Path, user: &str, payload_dir: &Path) -> Self {
        let openbox_dir = home.join(".config").join("openbox");
        Self {
            home: home.to_path_buf(),
            user: user.to_string(),
            payload_dir: payload_dir.to_path_buf(),
            app_root: home.join(manifest::APP_DIR_NAME),
            xinitrc: home.join(".xinitrc"),
            autostart: openbox_dir.join("autostart"),
            openbox_dir,
            bashrc: home.join(".bashrc"),
        }
    }
}
