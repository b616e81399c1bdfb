//! Reading and writing material files.
//!
//! Output is rendered fully in memory before the destination is opened,
//! so a failed run never leaves a truncated or partial output file.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::domain::MaterialCollection;
use crate::error::{HeatPropsError, Result};

const INDENT: &[u8] = b"    ";

/// Load a material collection, rejecting files over `max_input_bytes` when a limit is set
pub fn read_collection(path: &Path, max_input_bytes: Option<u64>) -> Result<MaterialCollection> {
    let bytes = fs::read(path).map_err(|source| HeatPropsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let size = bytes.len() as u64;
    if let Some(limit) = max_input_bytes.filter(|limit| size > *limit) {
        return Err(HeatPropsError::InputTooLarge {
            path: path.to_path_buf(),
            actual: size,
            limit,
        });
    }

    let collection = parse_collection(&bytes).map_err(|source| HeatPropsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if collection.is_empty() {
        warn!(path = %path.display(), "Material file contains no records");
    }
    info!(path = %path.display(), records = collection.len(), "Loaded materials");
    Ok(collection)
}

/// Parse a material collection from JSON bytes
pub fn parse_collection(content: &[u8]) -> std::result::Result<MaterialCollection, serde_json::Error> {
    serde_json::from_slice(content)
}

/// Render a collection as JSON with sorted keys and 4-space indentation
pub fn render_collection(collection: &MaterialCollection) -> Result<Vec<u8>> {
    let value = serde_json::to_value(collection).map_err(HeatPropsError::Serialize)?;
    let sorted = sort_keys(value);

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sorted.serialize(&mut ser).map_err(HeatPropsError::Serialize)?;

    Ok(buf)
}

/// Write a collection to `path`, replacing any existing file
pub fn write_collection(path: &Path, collection: &MaterialCollection) -> Result<()> {
    let rendered = render_collection(collection)?;

    fs::write(path, rendered).map_err(|source| HeatPropsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = collection.len(), "Wrote materials");
    Ok(())
}

/// Recursively order object keys lexicographically
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::new();
            for (key, inner) in entries {
                sorted.insert(key, sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_collection(br#"{"name": "Steel"}"#).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_parse_rejects_non_object_element() {
        assert!(parse_collection(br#"[{"name": "Steel"}, 3]"#).is_err());
    }

    #[test]
    fn test_parse_reports_missing_name_location() {
        let err = parse_collection(b"[\n  {\"name\": \"Steel\"},\n  {\"mass\": 1}\n]").unwrap_err();
        assert!(err.to_string().contains("no \"name\" field"));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_render_sorts_and_indents() {
        let coll: MaterialCollection = serde_json::from_value(json!([
            {"name": "X", "b": {"z": 1, "a": [true, null]}, "a": 1}
        ]))
        .unwrap();

        let text = String::from_utf8(render_collection(&coll).unwrap()).unwrap();
        let expected = "[\n    {\n        \"a\": 1,\n        \"b\": {\n            \"a\": [\n                true,\n                null\n            ],\n            \"z\": 1\n        },\n        \"name\": \"X\"\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_collection() {
        let text = render_collection(&MaterialCollection::default()).unwrap();
        assert_eq!(text, b"[]");
    }

    #[test]
    fn test_read_enforces_size_limit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("materials.json");
        fs::write(&path, r#"[{"name": "Steel"}]"#).unwrap();

        let err = read_collection(&path, Some(4)).unwrap_err();
        assert!(matches!(err, HeatPropsError::InputTooLarge { limit: 4, .. }));

        let coll = read_collection(&path, Some(1024)).unwrap();
        assert_eq!(coll.len(), 1);

        let coll = read_collection(&path, None).unwrap();
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.json");
        fs::write(&path, b"[{\"name\": \"Stahlr\xf6hre Steel\"}]").unwrap();

        let err = read_collection(&path, None).unwrap_err();
        assert!(matches!(err, HeatPropsError::Parse { .. }), "{err}");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_read_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.json");
        fs::write(&path, "[]").unwrap();

        let coll = read_collection(&path, None).unwrap();
        assert!(coll.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_collection(&temp.path().join("absent.json"), None).unwrap_err();
        assert!(matches!(err, HeatPropsError::Read { .. }));
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        let coll: MaterialCollection =
            serde_json::from_value(json!([{"name": "Oak Wood", "count": 4}])).unwrap();

        write_collection(&path, &coll).unwrap();
        let reread = read_collection(&path, None).unwrap();
        assert_eq!(reread, coll);
    }
}
