//! Reading the models dump from disk.

use std::path::Path;

use crate::error::{ModelsError, Result};
use crate::filter::filter_text;

/// Read the whole file at `path` as text.
///
/// Only failing to open or read the file is reported, as
/// [`ModelsError::SourceUnavailable`]. Bytes that are not valid UTF-8 become
/// U+FFFD; the marker and host substrings are ASCII, so matching is unaffected.
pub fn read_source(path: &Path) -> Result<String> {
    log::debug!("reading {}", path.display());
    let bytes = std::fs::read(path).map_err(|source| ModelsError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("{} is not valid UTF-8; invalid bytes replaced", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Read `path` and return the lines naming unsupported repository locations.
pub fn scan_file(path: &Path) -> Result<Vec<String>> {
    let text = read_source(path)?;
    Ok(filter_text(&text).into_iter().map(str::to_owned).collect())
}
