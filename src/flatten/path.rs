use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a path: a mapping key or a sequence position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Location of a node within a value tree. The empty path is the root.
///
/// Paths grow by one segment per nesting level; each child gets its own
/// copy, so siblings never observe each other's segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    /// The empty path.
    pub fn root() -> Self {
        NodePath::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Copy of this path extended by one segment.
    pub fn child(&self, segment: Segment) -> NodePath {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        NodePath { segments }
    }

    /// Split into (parent path, last segment). The root has no last segment.
    pub fn split_leaf(mut self) -> (NodePath, Option<Segment>) {
        let leaf = self.segments.pop();
        (self, leaf)
    }

    /// Lossy single-string encoding: keys joined with `/`, indices rendered
    /// as `#N`, no leading separator at the root. `b/d#0` addresses index 0
    /// of the sequence under key `d` under key `b`; the root encodes as "".
    ///
    /// Keys containing `/` or `#` make this encoding ambiguous; callers that
    /// need round-trip safety should keep the structured segment form.
    pub fn to_delimited(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    if !out.is_empty() {
                        out.push('/');
                    }
                    out.push_str(key);
                }
                Segment::Index(index) => {
                    out.push('#');
                    out.push_str(&index.to_string());
                }
            }
        }
        out
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.to_delimited())
        }
    }
}

impl From<Vec<Segment>> for NodePath {
    fn from(segments: Vec<Segment>) -> Self {
        NodePath { segments }
    }
}

impl FromIterator<Segment> for NodePath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        NodePath {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: Vec<Segment>) -> NodePath {
        NodePath::from(segments)
    }

    #[test]
    fn test_delimited_encoding() {
        assert_eq!(NodePath::root().to_delimited(), "");
        assert_eq!(path(vec!["a".into()]).to_delimited(), "a");
        assert_eq!(path(vec!["b".into(), "c".into()]).to_delimited(), "b/c");
        assert_eq!(
            path(vec!["b".into(), "d".into(), 0usize.into()]).to_delimited(),
            "b/d#0"
        );
        assert_eq!(path(vec![0usize.into()]).to_delimited(), "#0");
        assert_eq!(
            path(vec![1usize.into(), 0usize.into()]).to_delimited(),
            "#1#0"
        );
        assert_eq!(
            path(vec![2usize.into(), "a".into()]).to_delimited(),
            "#2/a"
        );
    }

    #[test]
    fn test_split_leaf() {
        let (parent, leaf) = path(vec!["b".into(), "d".into(), 1usize.into()]).split_leaf();
        assert_eq!(parent, path(vec!["b".into(), "d".into()]));
        assert_eq!(leaf, Some(Segment::Index(1)));

        let (parent, leaf) = NodePath::root().split_leaf();
        assert!(parent.is_root());
        assert_eq!(leaf, None);
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = path(vec!["a".into()]);
        let child = parent.child(Segment::Index(3));
        assert_eq!(parent.len(), 1);
        assert_eq!(child.to_delimited(), "a#3");
    }

    #[test]
    fn test_construction_routes_agree() {
        let mut pushed = NodePath::root();
        pushed.push("b".into());
        pushed.push(1usize.into());

        let collected: NodePath = vec![Segment::from("b"), Segment::from(1usize)]
            .into_iter()
            .collect();

        let chained = NodePath::root().child("b".into()).child(1usize.into());

        assert_eq!(pushed, collected);
        assert_eq!(pushed, chained);
        assert_eq!(pushed.to_delimited(), "b#1");
    }

    #[test]
    fn test_serialize_as_segment_array() {
        let p = path(vec!["b".into(), 0usize.into()]);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"["b",0]"#);
    }

    #[test]
    fn test_display_root_marker() {
        assert_eq!(NodePath::root().to_string(), "(root)");
        assert_eq!(path(vec!["a".into(), 1usize.into()]).to_string(), "a#1");
    }
}
