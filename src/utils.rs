//! Utility functions for string formatting and file system checks.
//!
//! - String truncation for log previews
//! - Compact view counts for rendered output
//! - Output directory validation for `export`

use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes, backing off to the nearest
/// character boundary, and get an ellipsis and byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Format a view count the way video cards show it: `999`, `12.3K`, `4.5M`.
pub fn format_view_count(views: u64) -> String {
    match views {
        0..=999 => views.to_string(),
        1_000..=999_999 => format!("{:.1}K", views as f64 / 1_000.0),
        _ => format!("{:.1}M", views as f64 / 1_000_000.0),
    }
}

/// Name of the scratch file used to check that an output directory accepts writes.
const WRITE_CHECK_FILE: &str = ".daily_bytes_write_check";

/// Create `path` if needed and check that files can be written into it.
///
/// Writes and then removes a small scratch file. A scratch file that cannot
/// be removed is logged but does not fail the check.
///
/// # Errors
///
/// Returns the I/O error if the directory cannot be created (for example
/// when a path component is a regular file) or the scratch file cannot be
/// written.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), std::io::Error> {
    fs::create_dir_all(path).await?;

    let check = Path::new(path).join(WRITE_CHECK_FILE);
    fs::write(&check, b"ok").await?;
    if let Err(e) = fs::remove_file(&check).await {
        warn!(file = %check.display(), error = %e, "Could not remove write check file");
    }

    info!("Output directory is writable");
    Ok(())
}
