//! Error types and handling for lightberry-setup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every error is fatal: the pipeline aborts on the first failure and never
//! rolls back already-completed steps. Re-running the installer is the
//! documented remediation, so most `help` texts point there.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for provisioning operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    #[error("Refusing to run as root")]
    #[diagnostic(
        code(lightberry::privilege::violation),
        help(
            "Run lightberry-setup as the account that will own the kiosk. \
             The installer escalates with sudo only where needed."
        )
    )]
    PrivilegeViolation,

    #[error("Could not resolve the account home directory")]
    #[diagnostic(code(lightberry::target::no_home))]
    HomeDirUnavailable,

    #[error("Package installation failed (apt-get exited with status {status})")]
    #[diagnostic(
        code(lightberry::packages::install_failed),
        help("Check the apt-get output above, fix the cause, and re-run the installer")
    )]
    DependencyInstallFailure { status: i32 },

    #[error("Missing source asset: {path}")]
    #[diagnostic(
        code(lightberry::deploy::missing_asset),
        help("Run the installer from the root of a complete LightBerry OS checkout")
    )]
    MissingSourceAsset { path: String },

    #[error("Failed to update login profile {path}: {reason}")]
    #[diagnostic(
        code(lightberry::hook::profile_write_failed),
        help("Check ownership and permissions of the profile file")
    )]
    ProfileWriteFailure { path: String, reason: String },

    #[error("Failed to lock login profile {path}: {reason}")]
    #[diagnostic(code(lightberry::hook::profile_lock_failed))]
    ProfileLockFailed { path: String, reason: String },

    #[error("Group membership grant failed (usermod exited with status {status})")]
    #[diagnostic(
        code(lightberry::groups::grant_failed),
        help(
            "Without video/audio/input/dialout membership the kiosk cannot reach \
             the hardware at next boot. Fix sudo access and re-run the installer."
        )
    )]
    PermissionGrantFailure { status: i32 },

    #[error("Failed to run {program}: {reason}")]
    #[diagnostic(
        code(lightberry::process::spawn_failed),
        help("Check that the program is installed and on PATH")
    )]
    CommandSpawnFailed { program: String, reason: String },

    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(lightberry::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(lightberry::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

/// Creates a file read error from an IO error
pub fn read_failed(path: &std::path::Path, e: std::io::Error) -> SetupError {
    SetupError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Creates a file write error from an IO error
pub fn write_failed(path: &std::path::Path, e: std::io::Error) -> SetupError {
    SetupError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use std::path::Path;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(
                        error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    test_error_contains!(
        test_privilege_violation_message,
        SetupError::PrivilegeViolation,
        "root",
    );

    test_error_contains!(
        test_dependency_failure_carries_status,
        SetupError::DependencyInstallFailure { status: 100 },
        "apt-get",
        "100",
    );

    test_error_contains!(
        test_missing_asset_names_path,
        SetupError::MissingSourceAsset {
            path: "modules/weather.py".into()
        },
        "modules/weather.py",
    );

    test_error_contains!(
        test_profile_write_failure_names_profile,
        SetupError::ProfileWriteFailure {
            path: "/home/pi/.bashrc".into(),
            reason: "Permission denied".into()
        },
        ".bashrc",
        "Permission denied",
    );

    test_error_contains!(
        test_grant_failure_carries_status,
        SetupError::PermissionGrantFailure { status: 6 },
        "usermod",
        "6",
    );

    #[test]
    fn test_io_error_constructors_keep_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = write_failed(Path::new("/etc/shadow"), io);
        assert!(err.to_string().contains("/etc/shadow"));
        assert!(err.to_string().contains("denied"));
    }
}
