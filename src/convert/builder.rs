//! Recursive tree builder
//!
//! Walks a parsed XML node tree, filters it against the element schema,
//! normalizes attributes, and emits the typed render tree.

use crate::config::SvgOptions;
use crate::convert::baseline;
use crate::convert::normalize::normalize;
use crate::convert::schema::ElementKind;
use crate::tree::RenderNode;

/// One build pass over an XML tree.
///
/// The ordinal counter lives on the builder, so concurrent builds never
/// share state and any input builds to the same tree every time.
pub struct TreeBuilder<'a> {
    options: &'a SvgOptions,
    next_ordinal: usize,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(options: &'a SvgOptions) -> Self {
        Self {
            options,
            next_ordinal: 0,
        }
    }

    /// Convert one XML element and its subtree.
    ///
    /// Returns `None` for unsupported tags; the entire subtree rooted
    /// there is discarded, even if it contains supported elements.
    /// Character data, comments, and processing instructions never
    /// produce render nodes.
    pub fn build(&mut self, node: roxmltree::Node<'_, '_>) -> Option<RenderNode> {
        if !node.is_element() {
            return None;
        }
        let kind = ElementKind::from_tag(node.tag_name().name())?;

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        let children: Vec<RenderNode> = node
            .children()
            .filter(roxmltree::Node::is_element)
            .filter_map(|child| self.build(child))
            .collect();

        // roxmltree hands us local attribute names, so `xlink:href`
        // already arrives as `href`; the normalizer keeps the alias for
        // callers that pass qualified names.
        let raw = node.attributes().map(|a| (a.name(), a.value()));
        let mut attributes = normalize(raw, kind, self.options.fill.as_deref());

        match kind {
            ElementKind::Svg => {
                if let Some(width) = &self.options.width {
                    attributes.insert("width".to_string(), width.clone());
                }
                if let Some(height) = &self.options.height {
                    attributes.insert("height".to_string(), height.clone());
                }
            }
            ElementKind::Text | ElementKind::TSpan => {
                if let Some(y) = attributes.get("y").cloned() {
                    attributes.insert("y".to_string(), baseline::corrected_y(&y, node));
                }
            }
            _ => {}
        }

        Some(RenderNode {
            kind,
            ordinal,
            attributes,
            children,
        })
    }
}
