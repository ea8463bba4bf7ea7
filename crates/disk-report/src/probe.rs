//! Filesystem capacity lookup.
//!
//! Measurements describe the volume that contains a path, never the size of
//! the directory's contents.

use std::path::Path;

use tracing::debug;

use crate::error::{DiskError, Result};

/// Total, used, and free bytes of one filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskUsage {
    /// Build from raw capacity figures.
    ///
    /// `unallocated` counts every free block, reserved ones included;
    /// `available` is what an unprivileged user may still write. Used space is
    /// everything not unallocated, free space is what is available.
    pub fn from_capacity(total: u64, unallocated: u64, available: u64) -> Self {
        Self {
            total,
            used: total.saturating_sub(unallocated),
            free: available.min(total),
        }
    }
}

/// Source of filesystem capacity numbers.
pub trait SpaceProbe {
    /// Capacity of the filesystem that contains `path`.
    ///
    /// # Errors
    ///
    /// Fails when the OS cannot describe the filesystem holding `path`.
    fn usage(&self, path: &Path) -> Result<DiskUsage>;
}

/// Probe that asks the OS about the filesystem holding each path
/// (`statvfs` on Unix, `GetDiskFreeSpaceExW` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct StatvfsProbe;

impl SpaceProbe for StatvfsProbe {
    fn usage(&self, path: &Path) -> Result<DiskUsage> {
        let stats = fs4::statvfs(path).map_err(|source| DiskError::SpaceQuery {
            path: path.to_path_buf(),
            source,
        })?;
        let usage = DiskUsage::from_capacity(
            stats.total_space(),
            stats.free_space(),
            stats.available_space(),
        );
        debug!(path = %path.display(), ?usage, "filesystem capacity");
        Ok(usage)
    }
}
