//! Input validation for a predictor run.
//!
//! Everything here is a read-only check except [`ensure_output_dir`], which
//! creates the output tree and is kept separate so callers decide when the
//! filesystem gets touched. The `parse_*` functions adapt the pure checks to
//! clap's `value_parser` signature.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Modality;

fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

fn absolute(path: &Path, message: impl Fn() -> String) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|_| Error::validation(message()))
}

/// Existing path the current user can read. Returns it in absolute form.
pub fn readable_path(path: &Path) -> Result<PathBuf> {
    let message = || format!("Cannot read file at '{}'", path.display());
    if !path.exists() || !is_readable(path) {
        return Err(Error::validation(message()));
    }
    absolute(path, message)
}

/// Existing, readable directory. Returns it in absolute form.
pub fn readable_dir(path: &Path) -> Result<PathBuf> {
    let message = || format!("Cannot read directory at '{}'", path.display());
    if !path.is_dir() || !is_readable(path) {
        return Err(Error::validation(message()));
    }
    absolute(path, message)
}

/// Parse a non-negative integer up to `u64::MAX`. Surrounding whitespace is ignored.
pub fn whole_number(text: &str) -> Result<u64> {
    let message = || format!("{} is not a positive integer", text);
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        return Err(Error::validation(message()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| Error::validation(message()))
}

/// Number of files in `dir` whose name carries the modality suffix.
///
/// Stricter than a plain `*<suffix>` glob: matching directories and broken
/// symlinks are not counted, since neither can be read as an image.
pub fn count_modality_files(dir: &Path, modality: Modality) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !modality.matches(&name.to_string_lossy()) {
            continue;
        }
        if entry.path().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

/// Require exactly one T1w and exactly one T2w image in `dir`.
pub fn check_modalities(dir: &Path) -> Result<()> {
    for modality in Modality::ALL {
        let found = count_modality_files(dir, modality)?;
        debug!("Found {} {} file(s) in {:?}", found, modality, dir);
        if found != 1 {
            return Err(Error::validation(format!(
                "There must be exactly 1 {0} file in {1} directory, but the number of {0} files there currently is {2}",
                modality,
                dir.display(),
                found
            )));
        }
    }
    Ok(())
}

/// Probe write access by creating an anonymous temporary file inside `dir`.
pub fn writable_dir(dir: &Path) -> Result<()> {
    tempfile::tempfile_in(dir)
        .map(drop)
        .map_err(|_| Error::validation(format!("Cannot write to directory at {}", dir.display())))
}

/// Create `path` and any missing parents, then confirm it is a writable directory.
/// Calling this on an existing directory is a no-op apart from the checks.
pub fn ensure_output_dir(path: &Path) -> Result<PathBuf> {
    let message = || format!("Cannot create directory at {}", path.display());
    fs::create_dir_all(path).map_err(|_| Error::validation(message()))?;
    writable_dir(path).map_err(|_| Error::validation(message()))?;
    readable_dir(path).map_err(|_| Error::validation(message()))
}

pub fn parse_readable_dir(s: &str) -> std::result::Result<PathBuf, String> {
    readable_dir(Path::new(s)).map_err(|e| e.to_string())
}

pub fn parse_readable_file(s: &str) -> std::result::Result<PathBuf, String> {
    readable_path(Path::new(s)).map_err(|e| e.to_string())
}

pub fn parse_whole_number(s: &str) -> std::result::Result<u64, String> {
    whole_number(s).map_err(|e| e.to_string())
}
