//! Disk usage reporting.
//!
//! Reports total/used/free space of the filesystem holding a path and,
//! optionally, of each subdirectory down to a depth bound. On a single
//! volume every row shows the same numbers; the rows document coverage, not
//! per-folder sizes.

pub mod config;
mod error;
pub mod probe;
pub mod report;
pub mod scan;

pub use config::{DiskConfig, ResolvedTarget, resolve_target};
pub use error::{DiskError, Result};
pub use probe::{DiskUsage, SpaceProbe, StatvfsProbe};
pub use report::{DiskReport, DiskRow, build_rows, write_csv};
pub use scan::subdirectories;
