//! Purpose: File-level primitives behind the minify operation.
//! Exports: `read_source`, `parse_document`, `render_document`, `write_destination`.
//! Role: Map filesystem and parser failures onto the error taxonomy.
//! Invariants: A missing source is `NotFound`; every other read/write failure is `Io`.
//! Invariants: Parse failures are `InvalidJson` and carry the parser's line/column.
//! Invariants: Objects opening with the reserved number token are rejected before decode.
//! Invariants: Writes are full overwrites; no temp-file or rollback machinery.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::json;

pub(crate) fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| {
        let (kind, message) = match err.kind() {
            io::ErrorKind::NotFound => (ErrorKind::NotFound, "source file not found"),
            io::ErrorKind::InvalidData => (ErrorKind::Io, "source is not valid UTF-8 text"),
            _ => (ErrorKind::Io, "failed to read source file"),
        };
        Error::new(kind)
            .with_message(message)
            .with_path(path)
            .with_source(err)
    })
}

pub(crate) fn parse_document(input: &str) -> Result<Value, Error> {
    if let Some(offset) = json::parse::number_token_collision(input) {
        let (line, column) = line_column_at(input, offset);
        return Err(Error::new(ErrorKind::InvalidJson)
            .with_message("object key is reserved by the number decoder")
            .with_line_column(line, column)
            .with_hint(format!(
                "Rename the {:?} member; that exact key cannot be round-tripped.",
                json::parse::NUMBER_TOKEN
            )));
    }
    json::parse::from_str(input).map_err(|err| {
        Error::new(ErrorKind::InvalidJson)
            .with_message("invalid JSON")
            .with_line_column(err.line(), err.column())
            .with_source(err)
    })
}

fn line_column_at(input: &str, offset: usize) -> (usize, usize) {
    let before = &input[..offset];
    let line = before.matches('\n').count() + 1;
    let column = offset - before.rfind('\n').map_or(0, |at| at + 1) + 1;
    (line, column)
}

pub(crate) fn render_document(value: &Value) -> Result<String, Error> {
    json::render::to_compact(value).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to render compact JSON")
            .with_source(err)
    })
}

pub(crate) fn write_destination(path: &Path, text: &str) -> Result<u64, Error> {
    fs::write(path, text).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write destination file")
            .with_path(path)
            .with_source(err)
    })?;
    Ok(text.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::{parse_document, read_source, render_document, write_destination};
    use crate::core::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn read_source_maps_missing_file_to_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("absent.json");
        let err = read_source(&path).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn read_source_maps_invalid_utf8_to_io() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(&[0xff, 0xfe, b'{', b'}']).expect("write");
        let err = read_source(file.path()).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), Some("source is not valid UTF-8 text"));
    }

    #[test]
    fn parse_document_reports_location() {
        let err = parse_document("{\n  \"a\": 1,\n}").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.line(), Some(3));
        assert!(err.column().is_some());
    }

    #[test]
    fn parse_document_rejects_reserved_number_token_keys() {
        let doc = "{\"$serde_json::private::Number\": \"7\"}";
        let err = parse_document(doc).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(
            err.message(),
            Some("object key is reserved by the number decoder")
        );
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.column(), Some(2));
        assert!(err.hint().is_some());

        // The value type does not matter; the key alone triggers rejection.
        let bool_valued = "{\n  \"$serde_json::private::Number\": true\n}";
        let err = parse_document(bool_valued).expect_err("err");
        assert_eq!(
            err.message(),
            Some("object key is reserved by the number decoder")
        );
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.column(), Some(3));
    }

    #[test]
    fn parse_document_allows_reserved_token_in_values_and_later_keys() {
        let value = parse_document("{\"note\": \"$serde_json::private::Number\"}").expect("parse");
        assert_eq!(value["note"], "$serde_json::private::Number");

        let value =
            parse_document("{\"a\": 1, \"$serde_json::private::Number\": \"7\"}").expect("parse");
        assert_eq!(value["$serde_json::private::Number"], "7");
    }

    #[test]
    fn render_document_round_trips_parse_output() {
        let value = parse_document(r#"{ "a": 1, "b": [1, 2, 3] }"#).expect("parse");
        let text = render_document(&value).expect("render");
        assert_eq!(text, r#"{"a":1,"b":[1,2,3]}"#);
    }

    #[test]
    fn write_destination_overwrites_and_reports_bytes() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out.json");
        std::fs::write(&path, "previous contents that are longer").expect("seed");
        let bytes = write_destination(&path, "{\"a\":1}").expect("write");
        assert_eq!(bytes, 7);
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{\"a\":1}");
    }

    #[test]
    fn write_destination_maps_missing_parent_to_io() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("no-such-dir").join("out.json");
        let err = write_destination(&path, "{}").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.path(), Some(path.as_path()));
    }
}
