//! File copies that keep timestamps

use std::fs;
use std::io;
use std::path::Path;

use filetime::{FileTime, set_file_times};

/// Copy `src` to `dst` (following symlinks), then carry over the access
/// and modification times. Permissions are copied by `fs::copy`.
pub fn copy_preserving_times(src: &Path, dst: &Path) -> io::Result<u64> {
    let bytes = fs::copy(src, dst)?;

    let stat_src = fs::metadata(src)?;
    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(dst, file_time_access, file_time_modify)?;

    Ok(bytes)
}

/// Both paths exist and resolve to the same file.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Both files can be read and hold the same bytes.
pub fn same_contents(a: &Path, b: &Path) -> bool {
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(ma), Ok(mb)) if ma.len() == mb.len() => {}
        _ => return false,
    }
    match (fs::read(a), fs::read(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
