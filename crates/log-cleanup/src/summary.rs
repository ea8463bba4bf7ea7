use std::path::Path;
use std::time::SystemTime;

use log_cleanup::{CleanupConfig, CleanupPlan, CleanupSummary, DeleteOutcome, LogFile, Mode};
use tools_common::human_bytes;

pub fn header_lines(config: &CleanupConfig, plan: &CleanupPlan) -> Vec<String> {
    vec![
        format!("Mode: {}", config.mode.label()),
        format!("Path: {}", config.root.display()),
        format!("Days threshold: {}", config.days),
        format!("Recursive: {}", config.recursive),
        format!(
            "Found {} candidate files, {} eligible for cleanup.",
            plan.candidates,
            plan.eligible.len()
        ),
    ]
}

pub fn skip_line(path: &Path, error: &str) -> String {
    format!("SKIP: {} ({error})", path.display())
}

pub fn outcome_line(now: SystemTime, file: &LogFile, outcome: &DeleteOutcome) -> String {
    let age = log_cleanup::age_days(now, file.modified);
    let path = file.path.display();
    let size = human_bytes(file.size);
    match outcome {
        DeleteOutcome::WouldDelete => format!("WOULD DELETE ({age}d): {path} [{size}]"),
        DeleteOutcome::Deleted => format!("DELETED ({age}d): {path} [{size}]"),
        DeleteOutcome::Failed(error) => format!("FAILED: {path} ({error})"),
    }
}

pub fn summary_lines(mode: Mode, summary: &CleanupSummary) -> Vec<String> {
    let mut lines = vec![
        "Summary".to_string(),
        format!("- Eligible files: {}", summary.eligible),
    ];
    match mode {
        Mode::Delete => {
            lines.push(format!("- Deleted files: {}", summary.deleted));
            lines.push(format!("- Space freed: {}", human_bytes(summary.bytes)));
        }
        Mode::DryRun => {
            lines.push(format!(
                "- Potential space freed: {}",
                human_bytes(summary.bytes)
            ));
            lines.push("- No files were deleted (dry-run). Use --delete to remove files.".to_string());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;

    #[test]
    fn outcome_lines() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(100 * 86_400);
        let file = LogFile {
            path: PathBuf::from("/logs/app.log"),
            size: 2048,
            modified: now - Duration::from_secs(40 * 86_400 + 60),
        };
        assert_eq!(
            outcome_line(now, &file, &DeleteOutcome::WouldDelete),
            "WOULD DELETE (40d): /logs/app.log [2.0 KB]"
        );
        assert_eq!(
            outcome_line(now, &file, &DeleteOutcome::Deleted),
            "DELETED (40d): /logs/app.log [2.0 KB]"
        );
        assert_eq!(
            outcome_line(now, &file, &DeleteOutcome::Failed("denied".to_string())),
            "FAILED: /logs/app.log (denied)"
        );
    }

    #[test]
    fn dry_run_summary_has_reminder() {
        let summary = CleanupSummary {
            eligible: 1,
            deleted: 0,
            failed: 0,
            bytes: 1023,
        };
        let lines = summary_lines(Mode::DryRun, &summary);
        assert_eq!(lines[1], "- Eligible files: 1");
        assert_eq!(lines[2], "- Potential space freed: 1023.0 B");
        assert!(lines[3].contains("dry-run"));
        assert!(!lines.iter().any(|line| line.starts_with("- Deleted files")));
    }

    #[test]
    fn delete_summary_reports_freed_space() {
        let summary = CleanupSummary {
            eligible: 2,
            deleted: 1,
            failed: 1,
            bytes: 1_048_576,
        };
        let lines = summary_lines(Mode::Delete, &summary);
        assert_eq!(
            &lines[1..],
            [
                "- Eligible files: 2",
                "- Deleted files: 1",
                "- Space freed: 1.0 MB"
            ]
        );
    }
}
