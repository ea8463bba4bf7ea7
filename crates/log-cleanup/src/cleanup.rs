//! Eligibility planning and execution.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{info, warn};

use crate::config::Mode;
use crate::scan::{LogFile, ScanEntry};

const SECONDS_PER_DAY: u64 = 86_400;

/// Files selected for cleanup, oldest first.
#[derive(Debug, Clone, Default)]
pub struct CleanupPlan {
    /// Every matching log file, including those whose metadata failed.
    pub candidates: usize,
    pub eligible: Vec<LogFile>,
    pub skipped: Vec<(PathBuf, String)>,
}

impl CleanupPlan {
    pub fn eligible_bytes(&self) -> u64 {
        self.eligible.iter().map(|file| file.size).sum()
    }
}

/// What happened to one eligible file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    WouldDelete,
    Deleted,
    Failed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub eligible: usize,
    pub deleted: usize,
    pub failed: usize,
    /// Bytes actually removed in delete mode, or reclaimable in dry-run.
    pub bytes: u64,
}

/// Oldest modification time that survives a threshold of `days`.
///
/// `None` when the threshold reaches past the clock's representable range,
/// in which case nothing is eligible.
pub fn cutoff(now: SystemTime, days: u64) -> Option<SystemTime> {
    now.checked_sub(Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY)))
}

/// Whole days elapsed since `modified`; zero for timestamps in the future.
pub fn age_days(now: SystemTime, modified: SystemTime) -> u64 {
    now.duration_since(modified)
        .map(|age| age.as_secs() / SECONDS_PER_DAY)
        .unwrap_or(0)
}

/// Split scan results into eligible files and skips.
pub fn plan(entries: Vec<ScanEntry>, now: SystemTime, days: u64) -> CleanupPlan {
    let cutoff = cutoff(now, days);
    let mut plan = CleanupPlan {
        candidates: entries.len(),
        ..CleanupPlan::default()
    };
    for entry in entries {
        match entry {
            ScanEntry::Found(file) => {
                if cutoff.is_some_and(|cutoff| file.modified < cutoff) {
                    plan.eligible.push(file);
                }
            }
            ScanEntry::Skipped { path, error } => plan.skipped.push((path, error)),
        }
    }
    plan.eligible
        .sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.path.cmp(&b.path)));
    plan
}

/// Abstraction over file removal so execution can be observed in tests.
pub trait Remover {
    fn remove(&mut self, path: &Path) -> std::io::Result<()>;
}

/// Removes files from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&mut self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Process eligible files in order, reporting each outcome to `on_outcome`.
///
/// A dry run never touches `remover`. Individual failures are reported and
/// processing continues.
pub fn execute<R, F>(
    plan: &CleanupPlan,
    mode: Mode,
    remover: &mut R,
    mut on_outcome: F,
) -> CleanupSummary
where
    R: Remover + ?Sized,
    F: FnMut(&LogFile, &DeleteOutcome),
{
    let mut summary = CleanupSummary {
        eligible: plan.eligible.len(),
        ..CleanupSummary::default()
    };
    for file in &plan.eligible {
        let outcome = match mode {
            Mode::DryRun => {
                summary.bytes += file.size;
                DeleteOutcome::WouldDelete
            }
            Mode::Delete => match remover.remove(&file.path) {
                Ok(()) => {
                    summary.deleted += 1;
                    summary.bytes += file.size;
                    info!(path = %file.path.display(), size = file.size, "deleted");
                    DeleteOutcome::Deleted
                }
                Err(error) => {
                    summary.failed += 1;
                    warn!(path = %file.path.display(), %error, "delete failed");
                    DeleteOutcome::Failed(error.to_string())
                }
            },
        };
        on_outcome(file, &outcome);
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::io;

    use proptest::prelude::*;

    use super::*;

    const DAY: Duration = Duration::from_secs(SECONDS_PER_DAY);

    fn now() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(2_000_000_000)
    }

    fn file(name: &str, age_days: u32, size: u64) -> ScanEntry {
        ScanEntry::Found(LogFile {
            path: PathBuf::from(name),
            size,
            modified: now() - DAY * age_days,
        })
    }

    struct RecordingRemover {
        removed: Vec<PathBuf>,
        fail_on: Option<&'static str>,
    }

    impl Remover for RecordingRemover {
        fn remove(&mut self, path: &Path) -> io::Result<()> {
            if self.fail_on.is_some_and(|name| path.ends_with(name)) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.removed.push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn eligibility_is_strictly_older_than_cutoff() {
        let entries = vec![
            file("new.log", 1, 10),
            ScanEntry::Found(LogFile {
                path: PathBuf::from("edge.log"),
                size: 10,
                modified: now() - DAY * 30,
            }),
            file("old.log", 40, 10),
        ];
        let plan = plan(entries, now(), 30);
        assert_eq!(plan.candidates, 3);
        let names: Vec<_> = plan.eligible.iter().map(|f| f.path.clone()).collect();
        assert_eq!(names, vec![PathBuf::from("old.log")]);
    }

    #[test]
    fn plan_orders_oldest_first_then_by_path() {
        let entries = vec![
            file("b.log", 50, 1),
            file("c.log", 90, 1),
            file("a.log", 50, 1),
        ];
        let plan = plan(entries, now(), 30);
        let names: Vec<_> = plan.eligible.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("c.log"),
                PathBuf::from("a.log"),
                PathBuf::from("b.log")
            ]
        );
    }

    #[test]
    fn skipped_entries_count_as_candidates_only() {
        let entries = vec![
            file("old.log", 40, 1),
            ScanEntry::Skipped {
                path: PathBuf::from("gone.log"),
                error: "No such file".to_string(),
            },
        ];
        let plan = plan(entries, now(), 30);
        assert_eq!(plan.candidates, 2);
        assert_eq!(plan.eligible.len(), 1);
        assert_eq!(plan.skipped.len(), 1);
    }

    #[test]
    fn zero_days_selects_anything_in_the_past() {
        let plan = plan(vec![file("a.log", 0, 1)], now(), 0);
        assert!(plan.eligible.is_empty());
        let plan = super::plan(vec![file("a.log", 1, 1)], now(), 0);
        assert_eq!(plan.eligible.len(), 1);
    }

    #[test]
    fn age_is_floored() {
        let modified = now() - DAY * 40 - Duration::from_secs(3600);
        assert_eq!(age_days(now(), modified), 40);
        assert_eq!(age_days(now(), now() + DAY), 0);
    }

    #[test]
    fn dry_run_never_removes() {
        let plan = plan(vec![file("a.log", 40, 100), file("b.log", 45, 50)], now(), 30);
        let mut remover = RecordingRemover {
            removed: Vec::new(),
            fail_on: None,
        };
        let mut outcomes = Vec::new();
        let summary = execute(&plan, Mode::DryRun, &mut remover, |_, outcome| {
            outcomes.push(outcome.clone());
        });
        assert!(remover.removed.is_empty());
        assert_eq!(outcomes, vec![DeleteOutcome::WouldDelete; 2]);
        assert_eq!(summary.eligible, 2);
        assert_eq!(summary.deleted, 0);
        assert_eq!(summary.bytes, 150);
    }

    #[test]
    fn delete_continues_past_failures() {
        let plan = plan(
            vec![file("a.log", 40, 100), file("b.log", 45, 50), file("c.log", 50, 7)],
            now(),
            30,
        );
        let mut remover = RecordingRemover {
            removed: Vec::new(),
            fail_on: Some("b.log"),
        };
        let mut failed = Vec::new();
        let summary = execute(&plan, Mode::Delete, &mut remover, |file, outcome| {
            if let DeleteOutcome::Failed(error) = outcome {
                failed.push((file.path.clone(), error.clone()));
            }
        });
        assert_eq!(remover.removed, vec![PathBuf::from("c.log"), PathBuf::from("a.log")]);
        assert_eq!(failed, vec![(PathBuf::from("b.log"), "denied".to_string())]);
        assert_eq!(summary.deleted, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.bytes, 107);
    }

    proptest! {
        #[test]
        fn raising_the_threshold_never_adds_files(
            ages in proptest::collection::vec(0u32..400, 0..20),
            low in 0u64..200,
            extra in 0u64..200,
        ) {
            let entries: Vec<ScanEntry> = ages
                .iter()
                .enumerate()
                .map(|(i, age)| file(&format!("{i}.log"), *age, 1))
                .collect();
            let loose = plan(entries.clone(), now(), low);
            let strict = plan(entries, now(), low + extra);
            for file in &strict.eligible {
                prop_assert!(loose.eligible.contains(file));
            }
        }
    }
}
