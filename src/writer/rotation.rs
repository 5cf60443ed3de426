//! Size-triggered rotation: an oversized file is renamed aside so the next
//! append starts a fresh file at the original path.

use crate::Error;
use crate::internal;
use crate::size::format_size;
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// `DDMMYYYYhhmmss`, appended to the base name of a rotated file.
pub const ROTATION_STAMP_FORMAT: &str = "%d%m%Y%H%M%S";

/// Renames `path` aside when it has reached `limit` bytes.
///
/// Returns the new location of the old file, or `None` when no rotation
/// was needed (no limit, missing file, file still under the limit).
///
/// # Errors
/// [`Error::Rotation`] when the rename fails.
pub fn rotate_if_needed(path: &Path, limit: i64) -> Result<Option<PathBuf>, Error> {
    let Ok(limit) = u64::try_from(limit) else {
        return Ok(None);
    };
    if limit == 0 {
        return Ok(None);
    }

    let Ok(metadata) = fs::metadata(path) else {
        return Ok(None);
    };
    if metadata.len() < limit {
        return Ok(None);
    }

    let target = rotated_path(path, Local::now().naive_local());
    fs::rename(path, &target).map_err(|source| Error::Rotation {
        path: path.to_path_buf(),
        source,
    })?;

    internal::debug(
        "ROTATE",
        &format!(
            "Rotated {} ({}) to {}",
            path.display(),
            format_size(metadata.len()),
            target.display()
        ),
    );
    Ok(Some(target))
}

/// Computes `<base>_<DDMMYYYYhhmmss>.<suffix>` next to `path`.
///
/// The base is the file name up to its first dot and the suffix everything
/// after it. When that name is already taken (two rotations within one
/// second) a counter is added: `<base>_<stamp>_1.<suffix>`, `_2`, ...
#[must_use]
pub fn rotated_path(path: &Path, now: NaiveDateTime) -> PathBuf {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (base, suffix) = match file_name.split_once('.') {
        Some((base, suffix)) if !base.is_empty() => (base, Some(suffix)),
        _ => (file_name.as_str(), None),
    };
    let stamp = now.format(ROTATION_STAMP_FORMAT).to_string();

    let mut counter = 0u32;
    loop {
        let stem = if counter == 0 {
            format!("{base}_{stamp}")
        } else {
            format!("{base}_{stamp}_{counter}")
        };
        let candidate = match suffix {
            Some(suffix) => dir.join(format!("{stem}.{suffix}")),
            None => dir.join(stem),
        };
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
