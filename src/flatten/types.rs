use crate::flatten::path::{NodePath, Segment};
use crate::flatten::value::Value;

/// Layout of emitted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordShape {
    /// (full path, value) pairs.
    #[default]
    FlatPair,
    /// (parent path, leaf segment, value) triples. The leaf is `None` only
    /// when the record describes the root itself.
    ParentLeafValue,
}

/// How paths are rendered when records are serialized.
///
/// Records always carry the structured `NodePath` in memory; this only
/// selects the wire form. The delimited form is lossy for keys containing
/// `/` or `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathEncoding {
    /// Path as a JSON array of segments, e.g. `["b", "d", 0]`.
    #[default]
    SegmentTuple,
    /// Path as a single delimited string, e.g. `"b/d#0"`.
    DelimitedString,
}

/// Configuration for the flattening process
#[derive(Debug, Clone, Copy)]
pub struct FlattenConfig {
    /// Record layout to emit
    pub record_shape: RecordShape,

    /// Path rendering used by writers and the CLI
    pub path_encoding: PathEncoding,

    /// Also emit one record per container (sequence or mapping), carrying an
    /// empty placeholder of the container's own kind, before its children
    pub emit_containers: bool,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        FlattenConfig {
            record_shape: RecordShape::FlatPair,
            path_encoding: PathEncoding::SegmentTuple,
            emit_containers: false,
        }
    }
}

/// One emitted output entry: a scalar leaf (or, optionally, a container)
/// together with the address used to reach it.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    FlatPair {
        path: NodePath,
        value: Value,
    },
    ParentLeafValue {
        parent: NodePath,
        leaf: Option<Segment>,
        value: Value,
    },
}

impl Record {
    pub fn value(&self) -> &Value {
        match self {
            Record::FlatPair { value, .. } => value,
            Record::ParentLeafValue { value, .. } => value,
        }
    }

    /// Full path to the described node. For the parent/leaf shape this
    /// reconstructs parent + leaf; for a root record it is the empty path.
    pub fn full_path(&self) -> NodePath {
        match self {
            Record::FlatPair { path, .. } => path.clone(),
            Record::ParentLeafValue { parent, leaf, .. } => match leaf {
                Some(segment) => parent.child(segment.clone()),
                None => parent.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_path_reconstruction() {
        let record = Record::ParentLeafValue {
            parent: NodePath::from(vec![Segment::Key("b".into())]),
            leaf: Some(Segment::Index(2)),
            value: Value::from(json!(7)),
        };
        assert_eq!(record.full_path().to_delimited(), "b#2");
    }

    #[test]
    fn test_full_path_of_root_record() {
        let record = Record::ParentLeafValue {
            parent: NodePath::root(),
            leaf: None,
            value: Value::Null,
        };
        assert!(record.full_path().is_root());
    }

    #[test]
    fn test_default_config() {
        let config = FlattenConfig::default();
        assert_eq!(config.record_shape, RecordShape::FlatPair);
        assert_eq!(config.path_encoding, PathEncoding::SegmentTuple);
        assert!(!config.emit_containers);
    }
}
