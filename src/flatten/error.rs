use crate::flatten::path::NodePath;
use thiserror::Error;

/// The single way a flatten can fail.
///
/// Traversal is a pure function of its input, so there are no transient or
/// retryable conditions; a failure always means the input tree contained a
/// kind outside the flattenable set. The walk stops at the first offender
/// and no partial record list is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlattenError {
    #[error("unsupported value kind `{kind}` at {path}")]
    UnsupportedValueKind {
        /// Kind descriptor of the offending value, e.g. "bytes".
        kind: &'static str,
        /// Where in the tree it was found.
        path: NodePath,
    },
}
