use crate::flatten::path::NodePath;
use crate::flatten::types::{PathEncoding, Record};
use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;

/// Writes records as newline-delimited JSON, one object per record.
///
/// Flat pairs render as `{"path": …, "value": …}`; parent/leaf/value
/// records as `{"parent": …, "leaf": …, "value": …}` with a JSON null leaf
/// for the root sentinel. Paths render per the configured [`PathEncoding`].
pub struct RecordWriter<W: Write> {
    writer: W,
    encoding: PathEncoding,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W, encoding: PathEncoding) -> Self {
        RecordWriter { writer, encoding }
    }

    /// Write a batch of records
    pub fn write_records(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            let line = serde_json::to_string(&self.render(record))
                .context("Failed to serialize record")?;
            writeln!(self.writer, "{}", line).context("Failed to write record")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, record: &Record) -> serde_json::Value {
        match record {
            Record::FlatPair { path, value } => json!({
                "path": self.render_path(path),
                "value": value,
            }),
            Record::ParentLeafValue {
                parent,
                leaf,
                value,
            } => json!({
                "parent": self.render_path(parent),
                "leaf": leaf,
                "value": value,
            }),
        }
    }

    fn render_path(&self, path: &NodePath) -> serde_json::Value {
        match self.encoding {
            PathEncoding::SegmentTuple => json!(path),
            PathEncoding::DelimitedString => json!(path.to_delimited()),
        }
    }
}
