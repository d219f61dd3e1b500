//! Purpose: Destination-path suggestion shared with embedding front ends.
//! Exports: `suggest_min_destination`.
//! Role: Keep CLI and form-collaborator path semantics aligned from one source.
//! Invariants: The `min` marker lands before the final extension when one exists.
//! Invariants: Pure path computation; the filesystem is never touched.

use std::path::{Path, PathBuf};

pub(crate) fn suggest_min_destination(source: &Path) -> PathBuf {
    match source.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => source.with_extension(format!("min.{ext}")),
        None => {
            let mut name = source.as_os_str().to_os_string();
            name.push(".min.json");
            PathBuf::from(name)
        }
    }
}
