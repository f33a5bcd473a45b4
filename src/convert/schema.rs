//! Element schema: the whitelist of supported SVG tags and their attributes
//!
//! This is the single source of truth for tag knowledge. Every other part
//! of the conversion engine dispatches through [`ElementKind`]; no tag name
//! appears in conditional logic elsewhere.

use serde::Serialize;

/// Attributes accepted on every supported element, in addition to the
/// tag-specific set.
pub const COMMON_ATTRIBUTES: &[&str] = &[
    "id",
    "fill",
    "fillOpacity",
    "stroke",
    "strokeWidth",
    "strokeOpacity",
    "opacity",
    "strokeLinecap",
    "strokeLinejoin",
    "strokeDasharray",
    "strokeDashoffset",
    "x",
    "y",
    "rotate",
    "scale",
    "origin",
    "originX",
    "originY",
    "transform",
];

/// The supported element vocabulary.
///
/// A tag outside this set is not rendered, and neither is anything nested
/// beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Svg,
    Group,
    Path,
    Circle,
    Rect,
    Line,
    Defs,
    LinearGradient,
    RadialGradient,
    Stop,
    Ellipse,
    Polygon,
    Polyline,
    Text,
    TSpan,
    TextPath,
    Use,
    Symbol,
    Image,
    ClipPath,
    Mask,
    Pattern,
}

impl ElementKind {
    /// Look up the kind for an XML tag name. Returns `None` for any tag
    /// outside the supported vocabulary.
    pub fn from_tag(tag: &str) -> Option<ElementKind> {
        let kind = match tag {
            "svg" => ElementKind::Svg,
            "g" => ElementKind::Group,
            "path" => ElementKind::Path,
            "circle" => ElementKind::Circle,
            "rect" => ElementKind::Rect,
            "line" => ElementKind::Line,
            "defs" => ElementKind::Defs,
            "linearGradient" => ElementKind::LinearGradient,
            "radialGradient" => ElementKind::RadialGradient,
            "stop" => ElementKind::Stop,
            "ellipse" => ElementKind::Ellipse,
            "polygon" => ElementKind::Polygon,
            "polyline" => ElementKind::Polyline,
            "text" => ElementKind::Text,
            "tspan" => ElementKind::TSpan,
            "textPath" => ElementKind::TextPath,
            "use" => ElementKind::Use,
            "symbol" => ElementKind::Symbol,
            "image" => ElementKind::Image,
            "clipPath" => ElementKind::ClipPath,
            "mask" => ElementKind::Mask,
            "pattern" => ElementKind::Pattern,
            _ => return None,
        };
        Some(kind)
    }

    /// The source tag name for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Svg => "svg",
            ElementKind::Group => "g",
            ElementKind::Path => "path",
            ElementKind::Circle => "circle",
            ElementKind::Rect => "rect",
            ElementKind::Line => "line",
            ElementKind::Defs => "defs",
            ElementKind::LinearGradient => "linearGradient",
            ElementKind::RadialGradient => "radialGradient",
            ElementKind::Stop => "stop",
            ElementKind::Ellipse => "ellipse",
            ElementKind::Polygon => "polygon",
            ElementKind::Polyline => "polyline",
            ElementKind::Text => "text",
            ElementKind::TSpan => "tspan",
            ElementKind::TextPath => "textPath",
            ElementKind::Use => "use",
            ElementKind::Symbol => "symbol",
            ElementKind::Image => "image",
            ElementKind::ClipPath => "clipPath",
            ElementKind::Mask => "mask",
            ElementKind::Pattern => "pattern",
        }
    }

    /// Tag-specific attribute names, beyond [`COMMON_ATTRIBUTES`].
    ///
    /// Names are the canonical (camelCase, `href`-aliased) forms the
    /// normalizer produces.
    pub fn specific_attributes(self) -> &'static [&'static str] {
        match self {
            ElementKind::Svg => &["viewBox", "width", "height"],
            ElementKind::Group => &[],
            ElementKind::Path => &["d"],
            ElementKind::Circle => &["cx", "cy", "r"],
            ElementKind::Rect => &["width", "height"],
            ElementKind::Line => &["x1", "y1", "x2", "y2"],
            ElementKind::Defs => &[],
            ElementKind::LinearGradient => &["x1", "y1", "x2", "y2", "gradientUnits"],
            ElementKind::RadialGradient => &["cx", "cy", "r", "gradientUnits"],
            ElementKind::Stop => &["offset"],
            ElementKind::Ellipse => &["cx", "cy", "rx", "ry"],
            ElementKind::Polygon => &["points"],
            ElementKind::Polyline => &["points"],
            ElementKind::Text => &["fontFamily", "fontSize", "fontWeight"],
            ElementKind::TSpan => &["fontFamily", "fontSize", "fontWeight"],
            ElementKind::TextPath => &["href", "startOffset"],
            ElementKind::Use => &["href", "width", "height"],
            ElementKind::Symbol => &["viewBox", "width", "height"],
            ElementKind::Image => &[
                "width",
                "height",
                "preserveAspectRatio",
                "opacity",
                "href",
                "clipPath",
            ],
            ElementKind::ClipPath => &[],
            ElementKind::Mask => &["width", "height", "maskUnits"],
            ElementKind::Pattern => &["patternUnits", "width", "height", "viewBox"],
        }
    }

    /// Whether a canonical attribute name is accepted on this element.
    pub fn allows(self, name: &str) -> bool {
        self.specific_attributes().contains(&name) || COMMON_ATTRIBUTES.contains(&name)
    }
}
