//! Login-profile hook management
//!
//! The login profile (`.bashrc`) is the one file the installer does not own:
//! it must coexist with whatever the account already keeps there. The hook
//! lives in a uniquely-marked block, and every install rewrites the whole
//! file in one read-modify-write pass: strip any existing block (and any
//! legacy one-liners from older installers), keep everything else verbatim,
//! append exactly one fresh block.
//!
//! The rewrite runs under an advisory file lock so two installer processes
//! cannot interleave their read-modify-write cycles.

use std::fs;
use std::path::{Path, PathBuf};

use fslock::LockFile;

use crate::error::{Result, SetupError, read_failed};

/// First line of the managed hook block.
pub const HOOK_BEGIN: &str = "# >>> lightberry kiosk >>>";

/// Last line of the managed hook block.
pub const HOOK_END: &str = "# <<< lightberry kiosk <<<";

/// Marker carried by the single-line hook older installers appended.
pub const LEGACY_MARKER: &str = "# lightberry autostart";

/// The current hook block: start the graphical session only on the primary
/// physical console, and only when no display is attached yet.
pub const HOOK_BLOCK: &str = "\
# >>> lightberry kiosk >>>
if [ -z \"$DISPLAY\" ] && [ \"$(tty)\" = \"/dev/tty1\" ]; then
    startx
fi
# <<< lightberry kiosk <<<
";

/// RAII guard holding an advisory lock on a login profile.
///
/// The read-modify-write of the profile is a critical section; the lock file
/// sits next to the profile and is left in place between runs.
pub struct ProfileGuard {
    _lock: LockFile,
}

impl ProfileGuard {
    /// Acquire the profile lock, blocking until it is free.
    pub fn acquire(profile: &Path) -> Result<Self> {
        let lock_path = lock_path_for(profile);

        let mut lock =
            LockFile::open(lock_path.as_os_str()).map_err(|e| SetupError::ProfileLockFailed {
                path: profile.display().to_string(),
                reason: e.to_string(),
            })?;

        lock.lock().map_err(|e| SetupError::ProfileLockFailed {
            path: profile.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { _lock: lock })
    }
}

fn lock_path_for(profile: &Path) -> PathBuf {
    let mut name = profile
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".bashrc".to_string());
    name.push_str(".lightberry.lock");
    profile.with_file_name(name)
}

/// Compute the profile content with the hook block replaced.
///
/// Unrelated lines are preserved verbatim and in order. Any existing marked
/// block is dropped (an unterminated block is dropped through end of file),
/// as is every line carrying the legacy marker. The current block is then
/// appended once.
pub fn rewrite(content: &str) -> String {
    let mut kept = String::new();
    let mut in_block = false;

    for line in content.lines() {
        if in_block {
            if line.trim() == HOOK_END {
                in_block = false;
            }
            continue;
        }
        if line.trim() == HOOK_BEGIN {
            in_block = true;
            continue;
        }
        if line.contains(LEGACY_MARKER) {
            continue;
        }
        kept.push_str(line);
        kept.push('\n');
    }

    kept.push_str(HOOK_BLOCK);
    kept
}

/// Install the hook into the profile under the advisory lock.
///
/// A missing profile is treated as empty; the write creates it.
pub fn install_hook(profile: &Path) -> Result<()> {
    let _guard = ProfileGuard::acquire(profile)?;

    let existing = match fs::read_to_string(profile) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(read_failed(profile, e)),
    };

    let updated = rewrite(&existing);

    fs::write(profile, updated).map_err(|e| SetupError::ProfileWriteFailure {
        path: profile.display().to_string(),
        reason: e.to_string(),
    })
}
