//! The conversion engine
//!
//! Everything that turns a parsed XML tree into a render tree: the
//! element schema, the attribute normalizer, the baseline resolver, and
//! the recursive tree builder.

pub mod baseline;
pub mod builder;
pub mod normalize;
pub mod schema;

pub use builder::TreeBuilder;
pub use schema::ElementKind;
