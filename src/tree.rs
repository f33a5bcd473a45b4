//! The render tree handed to the host renderer
//!
//! Immutable once built: each node owns its normalized attributes and its
//! children in source document order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::convert::schema::ElementKind;

/// Canonical attribute name to value mapping. Keys are unique; iteration
/// order is deterministic but carries no meaning.
pub type Attributes = IndexMap<String, String>;

/// One drawable node of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    /// Which of the supported element kinds this node is.
    pub kind: ElementKind,
    /// Per-build ordinal for sibling disambiguation in the host renderer.
    /// Scoped to one build pass; no meaning beyond that.
    pub ordinal: usize,
    /// Normalized attributes, keys limited to the kind's allowed set.
    pub attributes: Attributes,
    /// Child nodes in source document order.
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Look up a normalized attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Deterministic indented outline of the tree, one node per line with
    /// attributes sorted by name. Used for diagnostics and snapshot tests.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.kind.tag());
        let mut names: Vec<&String> = self.attributes.keys().collect();
        names.sort();
        for name in names {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&self.attributes[name]);
            out.push('"');
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(out, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leaf(kind: ElementKind, ordinal: usize, attrs: &[(&str, &str)]) -> RenderNode {
        RenderNode {
            kind,
            ordinal,
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_dump_sorts_attributes() {
        let node = leaf(ElementKind::Rect, 0, &[("width", "5"), ("fill", "red")]);
        assert_eq!(node.dump(), "rect fill=\"red\" width=\"5\"\n");
    }

    #[test]
    fn test_dump_indents_children() {
        let mut root = leaf(ElementKind::Svg, 0, &[]);
        root.children
            .push(leaf(ElementKind::Circle, 1, &[("r", "4")]));
        assert_eq!(root.dump(), "svg\n  circle r=\"4\"\n");
    }

    #[test]
    fn test_serializes_to_json() {
        let node = leaf(ElementKind::Path, 3, &[("d", "M0 0")]);
        let json = serde_json::to_value(&node).expect("should serialize");
        assert_eq!(json["kind"], "Path");
        assert_eq!(json["attributes"]["d"], "M0 0");
        assert_eq!(json["children"], serde_json::json!([]));
    }
}
