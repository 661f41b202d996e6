//! crates/class_resources_core/src/files.rs
//!
//! Rules for resource file names: which names are accepted and which content
//! type a file is served with.

use std::path::Path;

use crate::ports::{PortError, PortResult};

/// Content type for any extension missing from the table.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Rejects names that could address something outside the resources directory.
pub fn validate_filename(filename: &str) -> PortResult<()> {
    if filename.is_empty()
        || filename.contains("..")
        || filename.starts_with('/')
        || filename.starts_with('\\')
    {
        return Err(PortError::BadRequest("Invalid filename".to_string()));
    }
    Ok(())
}

/// Maps a file name to the content type it is served with.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("jsx" | "js" | "py" | "java" | "cpp" | "txt") => "text/plain",
        Some("md") => "text/markdown",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
