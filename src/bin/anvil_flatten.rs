//! anvil-flatten: hammer nested JSON into flat (path, value) records
//!
//! Usage:
//!   # Read from file, output records to stdout
//!   anvil-flatten data.json
//!
//!   # Read from stdin
//!   echo '{"a": 1, "b": {"d": [3, 4]}}' | anvil-flatten
//!
//!   # Process NDJSON, one document per line
//!   anvil-flatten --ndjson events.jsonl
//!
//!   # Parent/leaf/value records with string-encoded paths
//!   anvil-flatten --shape parent-leaf-value --path-encoding delimited-string data.json

// Use MiMalloc allocator for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anvil::flatten::{
    FlattenConfig, Flattener, PathEncoding, RecordShape, RecordWriter, Value,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufReader, Read};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShapeArg {
    /// (full path, value) pairs
    FlatPair,
    /// (parent path, leaf segment, value) triples
    ParentLeafValue,
}

impl From<ShapeArg> for RecordShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::FlatPair => RecordShape::FlatPair,
            ShapeArg::ParentLeafValue => RecordShape::ParentLeafValue,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncodingArg {
    /// Paths as JSON arrays of segments
    SegmentTuple,
    /// Paths as single delimited strings ("b/d#0")
    DelimitedString,
}

impl From<EncodingArg> for PathEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::SegmentTuple => PathEncoding::SegmentTuple,
            EncodingArg::DelimitedString => PathEncoding::DelimitedString,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "anvil-flatten")]
#[command(about = "Flatten nested JSON into linear path/value records", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Process newline-delimited JSON (one JSON document per line)
    #[arg(long)]
    ndjson: bool,

    /// Record layout (default: flat-pair)
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// Path rendering (default: segment-tuple)
    #[arg(long, value_enum)]
    path_encoding: Option<EncodingArg>,

    /// Also emit one record per container, before its children
    #[arg(long)]
    emit_containers: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = FlattenConfig::default();
    if let Some(shape) = args.shape {
        config.record_shape = shape.into();
    }
    if let Some(encoding) = args.path_encoding {
        config.path_encoding = encoding.into();
    }
    config.emit_containers = args.emit_containers;

    let mut content = Vec::new();
    if let Some(file_path) = &args.input {
        let mut reader = BufReader::new(
            File::open(file_path).context(format!("Failed to open file: {}", file_path))?,
        );
        reader.read_to_end(&mut content)?;
    } else {
        std::io::stdin().read_to_end(&mut content)?;
    }

    let stdout = std::io::stdout();
    let mut writer = RecordWriter::new(stdout.lock(), config.path_encoding);
    let flattener = Flattener::new(config);

    if args.ndjson {
        process_ndjson(&content, &flattener, &mut writer)?;
    } else {
        process_document(content, &flattener, &mut writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Flatten a single JSON document
fn process_document<W: std::io::Write>(
    content: Vec<u8>,
    flattener: &Flattener,
    writer: &mut RecordWriter<W>,
) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_slice(&content).context("Failed to parse JSON")?;

    let records = flattener.flatten(Value::from(value))?;
    writer.write_records(&records)?;
    Ok(())
}

/// Flatten each line of a newline-delimited JSON stream
fn process_ndjson<W: std::io::Write>(
    content: &[u8],
    flattener: &Flattener,
    writer: &mut RecordWriter<W>,
) -> Result<()> {
    let content_str = std::str::from_utf8(content).context("Input is not valid UTF-8")?;
    for line in content_str.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: serde_json::Value =
            serde_json::from_str(line).context("Failed to parse JSON")?;

        let records = flattener.flatten(Value::from(value))?;
        writer.write_records(&records)?;
    }
    Ok(())
}
