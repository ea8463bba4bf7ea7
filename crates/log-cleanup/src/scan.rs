//! Candidate discovery under the cleanup root.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{CleanupError, Result};

/// Extensions treated as log files, compared case-insensitively.
pub const LOG_EXTENSIONS: &[&str] = &["log", "txt"];

/// A regular file with a log extension and readable metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

/// Outcome of inspecting one matching path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEntry {
    Found(LogFile),
    /// Metadata could not be read; the file is left alone.
    Skipped { path: PathBuf, error: String },
}

pub fn has_log_extension(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| {
            LOG_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// List log files directly under `root`, or the whole tree when `recursive`.
///
/// Entries come back sorted by path. Symlinked directories are not entered.
///
/// # Errors
///
/// Fails only when `root` itself cannot be listed; unreadable subdirectories
/// are logged and ignored.
pub fn discover(root: &Path, recursive: bool) -> Result<Vec<ScanEntry>> {
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut entries = Vec::new();
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 => {
                return Err(CleanupError::DirectoryRead {
                    path: root.to_path_buf(),
                    source: error.into(),
                });
            }
            Err(error) => {
                debug!(path = ?error.path(), %error, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !has_log_extension(path) || !path.is_file() {
            continue;
        }
        entries.push(inspect(path));
    }
    entries.sort_by(|a, b| entry_path(a).cmp(entry_path(b)));
    Ok(entries)
}

fn inspect(path: &Path) -> ScanEntry {
    let metadata = std::fs::metadata(path).and_then(|meta| Ok((meta.len(), meta.modified()?)));
    match metadata {
        Ok((size, modified)) => ScanEntry::Found(LogFile {
            path: path.to_path_buf(),
            size,
            modified,
        }),
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping unreadable file");
            ScanEntry::Skipped {
                path: path.to_path_buf(),
                error: error.to_string(),
            }
        }
    }
}

fn entry_path(entry: &ScanEntry) -> &Path {
    match entry {
        ScanEntry::Found(file) => &file.path,
        ScanEntry::Skipped { path, .. } => path,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn names(entries: &[ScanEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| {
                entry_path(entry)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(has_log_extension(Path::new("app.log")));
        assert!(has_log_extension(Path::new("APP.LOG")));
        assert!(has_log_extension(Path::new("notes.Txt")));
        assert!(!has_log_extension(Path::new("app.log.gz")));
        assert!(!has_log_extension(Path::new("log")));
    }

    #[test]
    fn only_top_level_unless_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.log"), b"b").unwrap();
        fs::write(dir.path().join("a.TXT"), b"a").unwrap();
        fs::write(dir.path().join("image.png"), b"x").unwrap();
        fs::write(dir.path().join("nested/c.log"), b"c").unwrap();
        fs::create_dir(dir.path().join("dir.log")).unwrap();

        let flat = discover(dir.path(), false).unwrap();
        assert_eq!(names(&flat), vec!["a.TXT", "b.log"]);

        let deep = discover(dir.path(), true).unwrap();
        assert_eq!(names(&deep), vec!["a.TXT", "b.log", "c.log"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_does_not_stop_discovery() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        for sub in ["locked", "open"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        fs::write(dir.path().join("top.log"), b"t").unwrap();
        fs::write(dir.path().join("locked/inner.log"), b"i").unwrap();
        fs::write(dir.path().join("open/deep.log"), b"d").unwrap();

        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // Privileged users read through permission bits.
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = discover(dir.path(), true);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let entries = result.unwrap();
        assert_eq!(names(&entries), vec!["deep.log", "top.log"]);
    }

    #[test]
    fn unreadable_file_is_skipped_with_a_warning() {
        use std::io::{self, Write};
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();

        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("rotated.log");
        let entry = tracing::subscriber::with_default(subscriber, || inspect(&missing));

        assert!(matches!(&entry, ScanEntry::Skipped { path, .. } if *path == missing));
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("skipping unreadable file"), "{output}");
        assert!(output.contains("rotated.log"), "{output}");
        assert!(output.contains("error="), "{output}");
    }

    #[test]
    fn found_entries_carry_size() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.log"), b"12345").unwrap();
        let entries = discover(dir.path(), false).unwrap();
        match &entries[0] {
            ScanEntry::Found(file) => assert_eq!(file.size, 5),
            other => panic!("unexpected entry: {other:?}"),
        }
    }
}
