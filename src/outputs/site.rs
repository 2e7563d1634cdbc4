//! Writes the rendered page to disk.
//!
//! The file is overwritten in place on every run. There is no temp file or
//! rename, so a crash mid-write can leave a truncated page behind.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Overwrite `path` with `html` (UTF-8), creating the parent directory if needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
#[instrument(level = "info", skip_all, fields(%path, bytes = html.len()))]
pub async fn write_page(path: &str, html: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(parent = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, html).await?;
    info!("Wrote HTML page");
    Ok(())
}
