//! Attribute normalization pipeline
//!
//! Turns the raw attribute list of one XML element into the canonical
//! name/value mapping the host renderer understands: inline `style`
//! declarations merged in (style wins), hyphenated names camelCased,
//! `px` suffixes stripped, names filtered against the element's allowed
//! set, `xlink:href` aliased to `href`, `transform` commas replaced by
//! spaces, and the global fill override applied.

use crate::convert::schema::ElementKind;
use crate::tree::Attributes;

/// Normalize one element's raw attributes against its allowed set.
///
/// `raw` is the attribute list in document order. `fill_override`, when
/// set, recolors any resolved `fill` value other than the literal `none`.
pub fn normalize<'a, I>(raw: I, kind: ElementKind, fill_override: Option<&str>) -> Attributes
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = Attributes::new();
    let mut style_text = None;

    for (name, value) in raw {
        if name == "style" {
            style_text = Some(value);
            continue;
        }
        out.insert(canonical_name(name), strip_px(value));
    }

    // Style declarations land after plain attributes so they win on
    // conflict, matching inline-style precedence.
    if let Some(style) = style_text {
        for (name, value) in parse_style(style) {
            out.insert(name, strip_px(&value));
        }
    }

    out.retain(|name, _| kind.allows(name));

    // The renderer's transform grammar is whitespace-separated.
    if let Some(value) = out.get_mut("transform") {
        let cleaned = value.replace(',', " ");
        *value = cleaned;
    }

    if let Some(color) = fill_override {
        if let Some(value) = out.get_mut("fill") {
            // An explicit fill="none" is a "no fill" intent that
            // recoloring must not violate.
            if value.as_str() != "none" {
                *value = color.to_string();
            }
        }
    }

    out
}

/// Canonical form of a raw attribute name: the `xlink:href` alias, then
/// hyphen-to-camelCase conversion for everything else.
fn canonical_name(name: &str) -> String {
    if name == "xlink:href" {
        return "href".to_string();
    }
    camel_case(name)
}

/// Convert a hyphen-separated name to camelCase (`font-size` → `fontSize`).
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Strip a trailing `px` unit from an otherwise numeric value
/// (`"5px"` → `"5"`). Non-numeric values pass through untouched.
pub fn strip_px(value: &str) -> String {
    match value.strip_suffix("px") {
        Some(number) if number.parse::<f64>().is_ok() => number.to_string(),
        _ => value.to_string(),
    }
}

/// Parse an inline `style` attribute into canonical (name, value) pairs.
///
/// Declarations are semicolon-separated `property:value` entries; names
/// are camelCased. Empty or malformed declarations are skipped.
pub fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                return None;
            }
            Some((camel_case(name), value.to_string()))
        })
        .collect()
}
