use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

const EXPORT_EXTENSION: &str = "txt";

/// Expand CLI path arguments into a list of export files.
///
/// Files are taken as given (whatever their extension). Directories are walked
/// recursively for `*.txt` files, sorted by path so runs are reproducible.
/// `-` is passed through for stdin.
///
/// # Errors
///
/// Returns an error if a path does not exist or nothing was found at all.
pub fn discover_exports(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.as_os_str() == STDIN_PATH {
            found.push(path.clone());
            continue;
        }
        if !path.exists() {
            bail!("Path not found: {}", path.display());
        }
        if path.is_file() {
            found.push(path.clone());
            continue;
        }

        let mut in_dir = Vec::new();
        for entry in WalkDir::new(path).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", path.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() && is_export_file(entry.path()) {
                in_dir.push(entry.into_path());
            }
        }
        in_dir.sort();
        debug!(dir = %path.display(), files = in_dir.len(), "discovered exports");
        found.extend(in_dir);
    }

    if found.is_empty() {
        bail!("No chat exports (*.{}) found", EXPORT_EXTENSION);
    }

    Ok(found)
}

fn is_export_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case(EXPORT_EXTENSION))
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.display().to_string()
}
