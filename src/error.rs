//! Error types for document acquisition and parsing
//!
//! Every variant here is recovered at the render boundary; callers see
//! "no tree this pass", never a propagated failure. Unsupported elements
//! are not errors at all, only silent filtering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    /// Fetching remote SVG text failed. Produced by [`SvgFetcher`]
    /// implementations.
    ///
    /// [`SvgFetcher`]: crate::loader::SvgFetcher
    #[error("failed to fetch svg from {uri}: {message}")]
    Acquisition { uri: String, message: String },

    /// The input text contains no `<svg ` / `</svg>` document markers.
    #[error("no <svg> document found in input")]
    MissingRoot,

    /// The extracted document is not well-formed XML.
    #[error("malformed svg document: {0}")]
    Parse(#[from] roxmltree::Error),
}
