//! Fixed provisioning inputs: package set, hardware groups, payload manifest
//!
//! Everything the installer consumes is declared here as compile-time
//! constants. There is deliberately no configuration file: the kiosk layout
//! is the product, not a knob.

/// System packages required for the kiosk session (apt, versionless).
///
/// Already-installed packages are a no-op for apt, so the whole set is passed
/// as one non-interactive batch on every run.
pub const PACKAGES: &[&str] = &[
    "xserver-xorg",
    "xinit",
    "x11-xserver-utils",
    "openbox",
    "unclutter",
    "python3",
    "python3-pygame",
];

/// OS groups granting the hardware access the kiosk application needs.
pub const HARDWARE_GROUPS: &[&str] = &["video", "audio", "input", "dialout"];

/// One entry of the application payload: a path relative to the checkout
/// root, copied to the same relative path under the application root.
/// Directories copy recursively.
pub struct ManifestEntry {
    pub source: &'static str,
    pub executable: bool,
}

/// The LightBerry OS application tree, in deployment order.
pub const APP_MANIFEST: &[ManifestEntry] = &[
    ManifestEntry {
        source: "lightberry_os.py",
        executable: true,
    },
    ManifestEntry {
        source: "light_phone_kiosk.py",
        executable: true,
    },
    ManifestEntry {
        source: "config",
        executable: false,
    },
    ManifestEntry {
        source: "modules",
        executable: false,
    },
    ManifestEntry {
        source: "utils",
        executable: false,
    },
];

/// Directory name of the application root under the account home.
pub const APP_DIR_NAME: &str = "lightberry-os";

/// Entry point launched by the Openbox autostart hook.
pub const APP_ENTRY_POINT: &str = "lightberry_os.py";

/// Runtime log file, created inside the application root at session start.
pub const KIOSK_LOG: &str = "kiosk.log";

/// Name of the generated reversal script inside the application root.
pub const UNINSTALL_SCRIPT: &str = "uninstall.sh";
