//! Candidate file collection.
//!
//! # Overview
//!
//! Resolves the ordered list of files to scan:
//!
//! 1. Each configured directory is listed (direct entries only, sorted by name).
//!    Subdirectories, and symlinks to directories, are skipped. Listed paths
//!    are cleaned lexically, so `-d ./src/` yields `src/a.go`.
//! 2. Explicit files are appended in configured order.
//! 3. If extension filters are configured, only paths whose extension matches
//!    one of them exactly (case-sensitive) are kept.
//!
//! Any directory that cannot be listed aborts collection.
//!
//! # Example
//!
//! ```no_run
//! use dupline::scanner::{collect_files, ScanConfig};
//! use std::path::PathBuf;
//!
//! let config = ScanConfig::new(vec![PathBuf::from(".")], Vec::new(), vec!["go".to_string()]);
//! for path in collect_files(&config).unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::{ScanConfig, ScanError};

/// Normalize an extension filter so it starts with `.`.
///
/// ```
/// use dupline::scanner::normalize_extension;
///
/// assert_eq!(normalize_extension("go"), ".go");
/// assert_eq!(normalize_extension(".go"), ".go");
/// ```
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Extension of the last path component, including the leading dot.
///
/// Everything from the final `.` of the file name onward, so `.bashrc`
/// yields `.bashrc` and `archive.tar.gz` yields `.gz`. Names without a dot
/// have no extension.
fn dotted_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rfind('.').map(|idx| name[idx..].to_string())
}

/// Check whether a path's extension matches one of the normalized filters.
#[must_use]
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    match dotted_extension(path) {
        Some(ext) => extensions.iter().any(|filter| *filter == ext),
        None => false,
    }
}

/// Clean a path lexically, without touching the filesystem.
///
/// `.` components and repeated separators are dropped, and `..` cancels the
/// preceding normal component. A leading `..` is kept; one directly after the
/// root is dropped. An empty result becomes `.`.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// List the direct, non-directory entries of `dir` in name order.
fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir =
        fs::read_dir(dir).map_err(|e| ScanError::from_read_dir(dir.to_path_buf(), e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ScanError::from_read_dir(dir.to_path_buf(), e))?;
        entries.push(entry);
    }
    entries.sort_by_key(|entry| entry.file_name());

    let mut paths = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = clean_path(&dir.join(entry.file_name()));
        // Follows symlinks
        if path.is_dir() {
            log::info!("[skip] {} is a directory", path.display());
            continue;
        }
        paths.push(path);
    }
    Ok(paths)
}

/// Resolve the ordered candidate file list for a scan.
///
/// # Errors
///
/// Returns [`ScanError`] if any configured directory cannot be listed.
/// No partial list is returned.
pub fn collect_files(config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let mut candidates = Vec::new();

    for dir in &config.dirs {
        candidates.extend(list_directory(dir)?);
    }
    candidates.extend(config.files.iter().cloned());

    if config.extensions.is_empty() {
        return Ok(candidates);
    }

    let filtered = candidates
        .into_iter()
        .filter(|path| {
            let keep = matches_extension(path, &config.extensions);
            if !keep {
                log::info!("[skip] {} does not match extensions", path.display());
            }
            keep
        })
        .collect();
    Ok(filtered)
}
