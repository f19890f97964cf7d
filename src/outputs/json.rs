//! JSON output for command results and exports.
//!
//! # Export Layout
//!
//! ```text
//! output_dir/
//! ├── featured.json      # FeaturedBundle
//! ├── tech.json          # first page of each category
//! ├── health.json
//! └── ...
//! ```

use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `value` as pretty-printed JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Write `value` to `{output_dir}/{name}.json`.
///
/// Creates `output_dir` if needed and returns the path written.
#[instrument(level = "info", skip_all, fields(%output_dir, %name))]
pub async fn write_json<T: Serialize + ?Sized>(
    value: &T,
    output_dir: &str,
    name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = to_pretty_json(value)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = Path::new(output_dir).join(format!("{name}.json"));
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON file");

    Ok(path)
}
