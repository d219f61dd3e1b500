//! Purpose: Implement the minify operations behind the public API surface.
//! Exports: `MinifyRequest`, `MinifyOutcome`, `WriteReceipt`, `minify`,
//! `minify_document`, and `suggest_destination`.
//! Role: Stable boundary for embedders; the CLI is a thin wrapper over this.
//! Invariants: A request with a destination writes only after the whole
//! document parsed and rendered; parse failures leave the filesystem alone.
#![allow(clippy::result_large_err)]

use crate::core::document::{parse_document, read_source, render_document, write_destination};
use crate::core::error::Error;
use crate::core::paths::suggest_min_destination;
use std::path::{Path, PathBuf};

pub type ApiResult<T> = Result<T, Error>;

/// A minification job: a source file and an optional destination file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinifyRequest {
    source: PathBuf,
    destination: Option<PathBuf>,
}

impl MinifyRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: None,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }
}

/// What `minify` produced: the compact text itself, or a receipt for the
/// file it wrote.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MinifyOutcome {
    Text(String),
    Written(WriteReceipt),
}

/// Confirmation that compact output landed on disk.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WriteReceipt {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Minify the source file named by `request`.
///
/// Without a destination the compact text is returned; with one it is
/// written out and a `WriteReceipt` is returned instead. Errors carry the
/// path they concern.
pub fn minify(request: &MinifyRequest) -> ApiResult<MinifyOutcome> {
    let raw = read_source(request.source())?;
    let compact = minify_document(&raw).map_err(|err| err.with_path(request.source()))?;

    match request.destination() {
        Some(destination) => {
            let bytes = write_destination(destination, &compact)?;
            Ok(MinifyOutcome::Written(WriteReceipt {
                source: request.source().to_path_buf(),
                destination: destination.to_path_buf(),
                bytes,
            }))
        }
        None => Ok(MinifyOutcome::Text(compact)),
    }
}

/// Minify JSON text already in memory. No filesystem access.
pub fn minify_document(raw: &str) -> ApiResult<String> {
    let value = parse_document(raw)?;
    render_document(&value)
}

/// Propose a destination path for `source` by inserting a `.min` marker
/// before its extension (`data.json` becomes `data.min.json`).
pub fn suggest_destination(source: &Path) -> PathBuf {
    suggest_min_destination(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use std::fs;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn request_without_destination_returns_text() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_file(&dir, "data.json", "{\n  \"a\": 1,\n  \"b\": [1, 2, 3]\n}\n");

        let outcome = minify(&MinifyRequest::new(&source)).unwrap();

        assert_eq!(
            outcome,
            MinifyOutcome::Text("{\"a\":1,\"b\":[1,2,3]}".to_string())
        );
    }

    #[test]
    fn request_with_destination_writes_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_file(&dir, "data.json", "[1, 2, 3]");
        let destination = dir.path().join("data.min.json");

        let outcome = minify(&MinifyRequest::new(&source).with_destination(&destination)).unwrap();

        match outcome {
            MinifyOutcome::Written(receipt) => {
                assert_eq!(receipt.source, source);
                assert_eq!(receipt.destination, destination);
                assert_eq!(receipt.bytes, 7);
            }
            other => panic!("expected a write receipt, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&destination).unwrap(), "[1,2,3]");
    }

    #[test]
    fn parse_failure_leaves_destination_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_file(&dir, "broken.json", "{\"a\": 1, }");
        let destination = dir.path().join("broken.min.json");

        let err = minify(&MinifyRequest::new(&source).with_destination(&destination)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.path(), Some(source.as_path()));
        assert!(!destination.exists());
    }

    #[test]
    fn missing_source_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("absent.json");

        let err = minify(&MinifyRequest::new(&source)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Some(source.as_path()));
    }

    #[test]
    fn minify_document_is_idempotent() {
        let once = minify_document("{\"a\": 1,\t\"b\": [1, 2, 3]}").unwrap();
        let twice = minify_document(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn suggested_destination_inserts_min_marker() {
        assert_eq!(
            suggest_destination(Path::new("data.json")),
            PathBuf::from("data.min.json")
        );
    }
}
