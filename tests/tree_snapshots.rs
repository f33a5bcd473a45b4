//! Snapshot tests over the deterministic tree dump
//!
//! `RenderNode::dump` prints one node per line with attributes sorted by
//! name, so whole-tree conversions can be pinned as inline snapshots.

use svg_scene::{render_tree, SvgOptions};

fn dump(svg: &str, options: &SvgOptions) -> String {
    let tree = render_tree(svg, options).expect("document should build");
    tree.dump().trim_end().to_string()
}

#[test]
fn test_basic_document() {
    let svg = r#"<svg width="100" height="100" viewBox="0 0 100 100">
        <g transform="translate(5,5)">
            <rect width="20px" height="10px" style="fill:green;stroke:black"/>
            <text y="30" font-size="10">label</text>
        </g>
    </svg>"#;

    insta::assert_snapshot!(dump(svg, &SvgOptions::new()), @r###"
    svg height="100" viewBox="0 0 100 100" width="100"
      g transform="translate(5 5)"
        rect fill="green" height="10" stroke="black" width="20"
        text fontSize="10" y="20"
    "###);
}

#[test]
fn test_defs_and_references() {
    let svg = r##"<svg width="10" height="10" xmlns:xlink="http://www.w3.org/1999/xlink">
        <defs>
            <linearGradient id="fade" x1="0" y1="0" x2="1" y2="0">
                <stop offset="0" stop-opacity="0.5"/>
                <stop offset="1"/>
            </linearGradient>
        </defs>
        <use xlink:href="#shape" width="4" height="4"/>
    </svg>"##;

    insta::assert_snapshot!(dump(svg, &SvgOptions::new()), @r###"
    svg height="10" width="10"
      defs
        linearGradient id="fade" x1="0" x2="1" y1="0" y2="0"
          stop offset="0"
          stop offset="1"
      use height="4" href="#shape" width="4"
    "###);
}

#[test]
fn test_fill_override_document() {
    let svg = r#"<svg width="10">
        <path d="M0 0" fill="red"/>
        <path d="M1 1" fill="none"/>
        <circle r="2" style="fill:#abcdef"/>
    </svg>"#;

    insta::assert_snapshot!(dump(svg, &SvgOptions::new().with_fill("blue")), @r###"
    svg width="10"
      path d="M0 0" fill="blue"
      path d="M1 1" fill="none"
      circle fill="blue" r="2"
    "###);
}
