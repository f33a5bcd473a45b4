//! Baseline correction for text positioning
//!
//! SVG anchors text at the baseline while the host renderer anchors at
//! the box top. For `text`/`tspan` nodes carrying a `y` coordinate we
//! approximate the conversion by subtracting the nearest self-or-ancestor
//! `font-size` from `y`. This is a heuristic, not real font metrics.

/// Resolve the corrected vertical coordinate for a text node.
///
/// Walks from `node` up through its ancestors and subtracts the first
/// `font-size` attribute found from `y`. The nearest carrier wins;
/// corrections never stack. Without any `font-size`, or when the values
/// are not numeric, `y` is returned unchanged.
pub fn corrected_y(y: &str, node: roxmltree::Node<'_, '_>) -> String {
    let Some(y_value) = leading_number(y) else {
        return y.to_string();
    };
    for ancestor in node.ancestors() {
        if let Some(font_size) = ancestor.attribute("font-size") {
            return match leading_number(font_size) {
                Some(size) => format_number(y_value - size),
                None => y.to_string(),
            };
        }
    }
    y.to_string()
}

/// Parse the leading numeric prefix of a value, so unit-suffixed sizes
/// like `"8px"` still resolve to `8`.
fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let mut end = 0;
    for (i, ch) in value.char_indices() {
        let numeric = ch.is_ascii_digit() || ch == '.' || ((ch == '+' || ch == '-') && i == 0);
        if !numeric {
            break;
        }
        end = i + ch.len_utf8();
    }
    value[..end].parse::<f64>().ok()
}

fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_first<F>(xml: &str, tag: &str, check: F)
    where
        F: FnOnce(roxmltree::Node<'_, '_>),
    {
        let doc = roxmltree::Document::parse(xml).expect("test xml should parse");
        let node = doc
            .descendants()
            .find(|n| n.has_tag_name(tag))
            .expect("tag should be present");
        check(node);
    }

    #[test]
    fn test_own_font_size_wins() {
        with_first(r#"<text y="20" font-size="8">hi</text>"#, "text", |node| {
            assert_eq!(corrected_y("20", node), "12");
        });
    }

    #[test]
    fn test_nearest_ancestor_font_size() {
        let xml = r#"<svg font-size="30"><g font-size="10"><text y="20">hi</text></g></svg>"#;
        with_first(xml, "text", |node| {
            assert_eq!(corrected_y("20", node), "10");
        });
    }

    #[test]
    fn test_no_font_size_anywhere() {
        with_first(r#"<svg><text y="20">hi</text></svg>"#, "text", |node| {
            assert_eq!(corrected_y("20", node), "20");
        });
    }

    #[test]
    fn test_unit_suffixed_font_size() {
        with_first(r#"<text y="20" font-size="8px">hi</text>"#, "text", |node| {
            assert_eq!(corrected_y("20", node), "12");
        });
    }

    #[test]
    fn test_fractional_result() {
        with_first(r#"<text y="20" font-size="7.5">x</text>"#, "text", |node| {
            assert_eq!(corrected_y("20", node), "12.5");
        });
    }

    #[test]
    fn test_non_numeric_values_left_alone() {
        with_first(r#"<text y="20" font-size="large">x</text>"#, "text", |node| {
            assert_eq!(corrected_y("20", node), "20");
        });
        with_first(r#"<text y="auto" font-size="8">x</text>"#, "text", |node| {
            assert_eq!(corrected_y("auto", node), "auto");
        });
    }
}
