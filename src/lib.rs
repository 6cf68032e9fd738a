//! # Anvil - Nested Value Flattening
//!
//! A library for hammering arbitrarily nested values (mappings, sequences,
//! scalars) into a flat sequence of records, each carrying the path used to
//! reach it.
//!
//! ## Quick Start
//!
//! ```rust
//! use anvil::flatten::{flatten, FlattenConfig, Value};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let data = json!({"a": 1, "b": {"c": 2, "d": [3, 4]}});
//!
//! let records = flatten(Value::from(data), FlattenConfig::default())?;
//!
//! // records[0] = (a) -> 1
//! // records[1] = (b, c) -> 2
//! // records[2] = (b, d, 0) -> 3
//! // records[3] = (b, d, 1) -> 4
//! assert_eq!(records.len(), 4);
//! assert_eq!(records[2].full_path().to_delimited(), "b/d#0");
//! # Ok(())
//! # }
//! ```
//!
//! ## Record shapes
//!
//! ```rust
//! use anvil::flatten::{flatten, FlattenConfig, RecordShape, Value};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = FlattenConfig {
//!     record_shape: RecordShape::ParentLeafValue,
//!     ..FlattenConfig::default()
//! };
//!
//! let records = flatten(Value::from(json!([1, [2, 3]])), config)?;
//!
//! // Each record splits the address into (parent path, leaf segment).
//! assert_eq!(records.len(), 3);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::io::BufRead;

pub mod flatten;

// Re-export commonly used types for convenience
pub use flatten::{
    flatten as flatten_value, FlattenConfig, FlattenError, Flattener, NodePath, PathEncoding,
    Record, RecordShape, RecordWriter, Segment, Value,
};

/// Main entry point for streams: flatten newline-delimited JSON documents
pub fn flatten_stream<R: BufRead, W: std::io::Write>(
    reader: R,
    writer: &mut RecordWriter<W>,
    config: FlattenConfig,
) -> Result<()> {
    let flattener = Flattener::new(config);

    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value =
            serde_json::from_str(&line).context("Failed to parse JSON")?;

        let records = flattener.flatten(Value::from(value))?;
        writer.write_records(&records)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_basic_flattening() {
        let input = serde_json::json!({
            "id": 1,
            "name": "Alice",
            "posts": [
                {"id": 10, "title": "Post 1"},
                {"id": 11, "title": "Post 2"}
            ]
        });

        let records = flatten_value(Value::from(input), FlattenConfig::default()).unwrap();

        // id, name, and two (id, title) pairs
        assert_eq!(records.len(), 6);
    }

    #[test]
    fn test_flatten_stream_ndjson() {
        let input = "{\"a\": 1}\n\n[true, null]\n";
        let mut writer = RecordWriter::new(Vec::new(), PathEncoding::DelimitedString);

        flatten_stream(Cursor::new(input), &mut writer, FlattenConfig::default()).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                r##"{"path":"a","value":1}"##,
                r##"{"path":"#0","value":true}"##,
                r##"{"path":"#1","value":null}"##,
            ]
        );
    }
}
