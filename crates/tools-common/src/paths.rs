use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` against `$HOME` (or `%USERPROFILE%`).
///
/// Paths without a leading tilde, and paths like `~user/x`, come back unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")) {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_home(Path::new("/var/log")), PathBuf::from("/var/log"));
        assert_eq!(expand_home(Path::new("logs/app")), PathBuf::from("logs/app"));
        assert_eq!(expand_home(Path::new("~user/x")), PathBuf::from("~user/x"));
    }

    #[test]
    fn expands_tilde_when_home_is_known() {
        let Some(home) = env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")) else {
            return;
        };
        assert_eq!(
            expand_home(Path::new("~/logs")),
            PathBuf::from(home).join("logs")
        );
    }
}
