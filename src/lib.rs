//! svg-scene - converts SVG markup into a typed render tree
//!
//! This library turns raw SVG text (inline, or fetched through a
//! caller-supplied [`SvgFetcher`]) into a tree of [`RenderNode`] values
//! a host vector renderer can draw. The conversion whitelists a fixed
//! element/attribute vocabulary, normalizes attributes into the
//! renderer's canonical forms, and applies a baseline-correction
//! heuristic to text coordinates.
//!
//! # Example
//!
//! ```rust
//! use svg_scene::{render_tree, SvgOptions};
//!
//! let svg = r#"<svg width="100" height="100">
//!     <rect width="5px" height="5px" fill="red"/>
//! </svg>"#;
//!
//! let tree = render_tree(svg, &SvgOptions::new()).unwrap();
//! assert_eq!(tree.children[0].attr("width"), Some("5"));
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod tree;

pub use config::SvgOptions;
pub use convert::{ElementKind, TreeBuilder};
pub use error::SvgError;
pub use loader::{CancelToken, DocumentLoader, FetchTicket, SvgFetcher};
pub use tree::{Attributes, RenderNode};

/// Extract the `<svg ...>...</svg>` portion of arbitrary input text.
///
/// This is a literal substring search from the first `<svg ` to the
/// first `</svg>` after it, not structural detection: an `<svg` inside
/// an upstream comment or attribute value will corrupt the boundaries.
/// Kept as-is deliberately so output stays bit-compatible with existing
/// consumers of the extraction.
pub fn extract_document(text: &str) -> Result<&str, SvgError> {
    let start = text.find("<svg ").ok_or(SvgError::MissingRoot)?;
    let rest = &text[start..];
    let end = rest.find("</svg>").ok_or(SvgError::MissingRoot)?;
    Ok(&rest[..end + "</svg>".len()])
}

/// Build a render tree from SVG source text, propagating failures.
///
/// `Ok(None)` means the document parsed but its root element is not
/// supported; in practice the extracted root is always `svg`.
pub fn try_render_tree(
    text: &str,
    options: &SvgOptions,
) -> Result<Option<RenderNode>, SvgError> {
    let document = extract_document(text)?;
    let doc = roxmltree::Document::parse(document)?;
    let mut builder = TreeBuilder::new(options);
    Ok(builder.build(doc.root_element()))
}

/// Build a render tree from SVG source text.
///
/// This is the render boundary: every failure (missing document markers,
/// malformed XML) is contained here, reported through `tracing`, and
/// degrades to `None`. Nothing ever propagates to the caller as an
/// error, so a bad document means "nothing rendered this pass", never a
/// crash.
pub fn render_tree(text: &str, options: &SvgOptions) -> Option<RenderNode> {
    match try_render_tree(text, options) {
        Ok(tree) => tree,
        Err(error) => {
            tracing::error!(%error, "svg conversion failed");
            None
        }
    }
}
