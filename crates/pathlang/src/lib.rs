#![forbid(unsafe_code)]

//! `pathlang` parses compact path strings (SVG path data plus fill rule, ellipse, polygon,
//! rectangle and rounded-rectangle figures) into renderer-agnostic vector geometry.
//!
//! ```
//! let geometry = pathlang::parse("F0 M 0,0 L 10,0 L 5,8 Z O 2 2 5 4").unwrap();
//! assert_eq!(geometry.figures.len(), 2);
//! assert_eq!(geometry.fill_rule, pathlang::FillRule::EvenOdd);
//! ```

pub use pathlang_core::*;

/// Renders geometry as a standalone SVG `<path>` element, carrying the fill rule that plain path
/// data cannot express.
pub fn to_svg_path_element(geometry: &Geometry) -> String {
    let fill_rule = match geometry.fill_rule {
        FillRule::EvenOdd => "evenodd",
        FillRule::Nonzero => "nonzero",
    };
    format!(
        r#"<path d="{}" fill-rule="{fill_rule}"/>"#,
        geometry.to_svg_path_data()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_element_carries_the_fill_rule() {
        let g = parse("F0 M 0 0 L 1 1 Z").unwrap();
        assert_eq!(
            to_svg_path_element(&g),
            r#"<path d="M0,0 L1,1 Z" fill-rule="evenodd"/>"#
        );
    }
}
