//! Application payload deployment
//!
//! Copies the manifest entries from the checkout into the application root
//! and sets the executable bit on the entry-point scripts. Re-running always
//! overwrites with current sources; install is "copy current sources", never
//! a merge. A missing source aborts with no rollback of files already
//! copied.

use std::fs;
use std::path::Path;

use crate::error::{Result, SetupError, write_failed};
use crate::fsutil;
use crate::manifest::{APP_MANIFEST, ManifestEntry};
use crate::pipeline::{Context, Step};
use crate::progress::DeployProgress;

pub struct FileDeployer;

impl Step for FileDeployer {
    fn name(&self) -> &'static str {
        "Deploying application files"
    }

    fn apply(&self, ctx: &Context) -> Result<()> {
        fsutil::ensure_dir(&ctx.target.app_root)?;

        let progress = DeployProgress::new(APP_MANIFEST.len() as u64);
        for entry in APP_MANIFEST {
            progress.update_entry(entry.source);
            deploy_entry(entry, &ctx.target.payload_dir, &ctx.target.app_root)?;
            progress.inc();
        }
        progress.finish();

        Ok(())
    }
}

fn deploy_entry(entry: &ManifestEntry, payload_dir: &Path, app_root: &Path) -> Result<()> {
    let source = payload_dir.join(entry.source);
    let dest = app_root.join(entry.source);

    if !source.exists() {
        return Err(SetupError::MissingSourceAsset {
            path: source.display().to_string(),
        });
    }

    if source.is_dir() {
        fsutil::copy_dir_recursive(&source, &dest).map_err(|e| write_failed(&dest, e))?;
    } else {
        fs::copy(&source, &dest).map_err(|e| write_failed(&dest, e))?;
    }

    if entry.executable {
        fsutil::set_executable(&dest)?;
    }

    Ok(())
}
