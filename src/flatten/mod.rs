//! Tree flattening - turn nested values into linear (path, value) records
//!
//! This module handles the reduction of arbitrarily nested values (mappings,
//! sequences, scalars) into a flat record sequence in pre-order depth-first
//! order, with each record carrying the address of the node it describes.

pub mod error;
pub mod path;
pub mod types;
pub mod value;
pub mod walker;
pub mod writer;

pub use error::FlattenError;
pub use path::{NodePath, Segment};
pub use types::{FlattenConfig, PathEncoding, Record, RecordShape};
pub use value::Value;
pub use walker::{flatten, Flattener};
pub use writer::RecordWriter;
