use crate::flatten::error::FlattenError;
use crate::flatten::path::{NodePath, Segment};
use crate::flatten::types::{FlattenConfig, Record, RecordShape};
use crate::flatten::value::Value;
use indexmap::IndexMap;

/// The core tree flattener: depth-first, pre-order, encounter order.
///
/// The walk runs on an explicit work stack rather than call-stack recursion,
/// so nesting depth is bounded by heap and deep caller-built trees cannot
/// blow the stack.
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Self {
        Flattener { config }
    }

    /// Flatten a value tree into records, in pre-order depth-first order.
    ///
    /// Scalars produce one record each. Containers produce records only when
    /// `emit_containers` is set, carrying an empty placeholder of their own
    /// kind, and always before any descendant record. A scalar root is a
    /// documented edge case: its record has the empty parent path and the
    /// root-sentinel leaf (`None`).
    ///
    /// Fails with [`FlattenError::UnsupportedValueKind`] the moment a
    /// non-flattenable kind is encountered anywhere in the tree; no partial
    /// result is returned.
    pub fn flatten(&self, value: Value) -> Result<Vec<Record>, FlattenError> {
        let mut records = Vec::new();
        let mut stack = vec![(NodePath::root(), value)];

        while let Some((path, value)) = stack.pop() {
            match value {
                Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => {
                    records.push(self.record(path, value));
                }
                Value::Sequence(items) => {
                    if self.config.emit_containers {
                        records.push(self.record(path.clone(), Value::Sequence(Vec::new())));
                    }
                    // Reversed so the work stack pops items in positional order.
                    for (index, item) in items.into_iter().enumerate().rev() {
                        stack.push((path.child(Segment::Index(index)), item));
                    }
                }
                Value::Mapping(entries) => {
                    if self.config.emit_containers {
                        records.push(self.record(path.clone(), Value::Mapping(IndexMap::new())));
                    }
                    for (key, item) in entries.into_iter().rev() {
                        stack.push((path.child(Segment::Key(key)), item));
                    }
                }
                value @ Value::Bytes(_) => {
                    return Err(FlattenError::UnsupportedValueKind {
                        kind: value.kind_name(),
                        path,
                    });
                }
            }
        }

        Ok(records)
    }

    fn record(&self, path: NodePath, value: Value) -> Record {
        match self.config.record_shape {
            RecordShape::FlatPair => Record::FlatPair { path, value },
            RecordShape::ParentLeafValue => {
                let (parent, leaf) = path.split_leaf();
                Record::ParentLeafValue {
                    parent,
                    leaf,
                    value,
                }
            }
        }
    }
}

/// Convenience entry point: flatten `value` with the given configuration.
pub fn flatten(value: Value, config: FlattenConfig) -> Result<Vec<Record>, FlattenError> {
    Flattener::new(config).flatten(value)
}
