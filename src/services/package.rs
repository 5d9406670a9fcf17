use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::model::index::YomiIndex;

pub const INDEX_FILE: &str = "index.json";

/// Dropped into every staging dir this tool creates. Never archived.
pub const STAGING_MARKER: &str = ".bkrs2yomi-staging";

/// Staging directory for one conversion run.
///
/// A stale staging dir from an earlier run is wiped on creation, and the
/// directory is removed again when the value is dropped. Existing
/// directories are only wiped when they are empty or carry
/// [`STAGING_MARKER`].
#[derive(Debug)]
pub struct Staging {
    path: PathBuf,
    removed: bool,
}

impl Staging {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.exists() {
            if !is_owned(&path)? {
                return Err(Error::StagingNotOwned { dir: path });
            }
            tracing::debug!("Removing stale staging dir {}", path.display());
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        fs::write(path.join(STAGING_MARKER), b"")?;

        Ok(Staging {
            path,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_index(&self, index: &YomiIndex) -> Result<()> {
        let json = serde_json::to_vec(index)?;
        fs::write(self.path.join(INDEX_FILE), json)?;
        Ok(())
    }

    /// Zips every file currently in the staging dir into `archive`.
    pub fn archive(&self, archive: &Path) -> Result<()> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<_>>()?;
        files.retain(|p| p.is_file() && !p.ends_with(STAGING_MARKER));
        files.sort();

        let mut zip = ZipWriter::new(File::create(archive)?);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for path in &files {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            zip.start_file(name, options)?;
            io::copy(&mut File::open(path)?, &mut zip)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Deletes the staging dir now instead of on drop, reporting failures.
    pub fn remove(mut self) -> Result<()> {
        self.removed = true;
        fs::remove_dir_all(&self.path)?;
        Ok(())
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            tracing::warn!("Failed to remove staging dir {}: {}", self.path.display(), e);
        }
    }
}

// Safe to wipe: ours from an earlier run, or holds nothing
fn is_owned(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    if path.join(STAGING_MARKER).is_file() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Writes `index.json`, zips the staging dir into `archive` and removes it.
///
/// Term banks must already be written, the archive is a snapshot of the
/// directory at call time.
pub fn assemble(staging: Staging, index: &YomiIndex, archive: &Path) -> Result<()> {
    staging.write_index(index)?;
    staging.archive(archive)?;
    tracing::info!("Wrote {}", archive.display());
    staging.remove()
}
