use std::io;
use std::path::Path;
use std::time::Duration;
use crate::common::common::{format_elapsed, format_size};

/// Total size of a file, or of every file below a directory. Symlinks are not followed.
pub fn path_size(path: &Path) -> io::Result<u64> {
    let metadata = std::fs::symlink_metadata(path)?;
    if !metadata.is_dir() {
        return Ok(metadata.len());
    }
    let mut total = 0;
    for entry in std::fs::read_dir(path)? {
        total += path_size(&entry?.path())?;
    }
    Ok(total)
}

/// Bytes per second; 0 for a zero-length interval.
pub fn transfer_rate(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { bytes as f64 / secs } else { 0.0 }
}

pub fn completion_message(name: &str, bytes: u64, elapsed: Duration) -> String {
    let rate = transfer_rate(bytes, elapsed);
    format!(
        "{} -- Transfer Complete ({}) -- Time Elapsed ( {} ) -- Rate [ {} | {} ]",
        name,
        format_size(bytes as f64, false, false).trim(),
        format_elapsed(elapsed),
        format_size(rate, true, false).trim(),
        format_size(rate, true, true).trim()
    )
}
