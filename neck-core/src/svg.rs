//! # SVG Export Module
//!
//! Renders a computed neck layout, plus an optional marking, as a
//! standalone SVG document. The neck itself is stroked outline work, the
//! way the drawing layer paints it; marked notes are filled dots, root
//! notes in red.

use crate::geometry::{ArcSegment, NeckLayout};
use crate::marking::MarkedNote;
use crate::neck::Handedness;

/// Stroke width for all outline work.
const STROKE_WIDTH: f32 = 0.025;
/// Fill for root-note markers.
const ROOT_COLOR: &str = "#ff0000";
/// Fill for ordinary note markers.
const MARK_COLOR: &str = "#000000";
/// Whitespace around the drawing in the viewBox.
const PADDING: f32 = 0.25;

/// Render `layout` with `marking` highlighted as an SVG document.
///
/// A left-handed neck is mirrored with a `scale(-1 1)` transform on the
/// drawing group; the geometry itself is always right-handed.
pub fn render(layout: &NeckLayout, marking: &[MarkedNote], handedness: Handedness) -> String {
    let (arc_end_x, arc_top_y) = layout.headstock[0].end_point();
    let (_, arc_bottom_y) = layout.headstock[1].end_point();
    let min_x = arc_end_x.min(-layout.nut.width) - PADDING;
    let max_x = layout.outline.width + PADDING;
    let min_y = arc_top_y.min(0.0) - PADDING;
    let max_y = arc_bottom_y.max(layout.nut_width) + PADDING;
    // Mirroring flips the x extent of the viewBox along with the drawing.
    let (vb_min_x, vb_max_x) = match handedness {
        Handedness::Right => (min_x, max_x),
        Handedness::Left => (-max_x, -min_x),
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.4} {:.4} {:.4} {:.4}\">\n",
        vb_min_x,
        min_y,
        vb_max_x - vb_min_x,
        max_y - min_y,
    ));
    svg.push_str(&format!(
        "<g fill=\"none\" stroke=\"{MARK_COLOR}\" stroke-width=\"{STROKE_WIDTH}\" \
         transform=\"scale({} 1)\">\n",
        handedness.x_sign(),
    ));

    svg.push_str(&rect(&layout.outline));
    svg.push_str(&rect(&layout.nut));
    for line in layout.fret_lines.iter().chain(&layout.string_lines) {
        svg.push_str(&format!(
            "<line x1=\"{:.4}\" y1=\"{:.4}\" x2=\"{:.4}\" y2=\"{:.4}\"/>\n",
            line.x1, line.y1, line.x2, line.y2,
        ));
    }
    for dot in &layout.markers {
        svg.push_str(&format!(
            "<circle cx=\"{:.4}\" cy=\"{:.4}\" r=\"{:.4}\"/>\n",
            dot.x,
            dot.y,
            dot.diameter / 2.0,
        ));
    }
    for arc in &layout.headstock {
        svg.push_str(&format!("<path d=\"{}\"/>\n", arc_path(arc)));
    }

    for mark in marking {
        let (x, y) = layout.note_point(mark.string, mark.fret);
        let color = if mark.is_root { ROOT_COLOR } else { MARK_COLOR };
        svg.push_str(&format!(
            "<circle cx=\"{:.4}\" cy=\"{:.4}\" r=\"{:.4}\" fill=\"{color}\" stroke=\"{color}\"/>\n",
            x,
            y,
            crate::geometry::MARKER_DIAMETER / 2.0,
        ));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn rect(r: &crate::geometry::Rect) -> String {
    format!(
        "<rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\"/>\n",
        r.x, r.y, r.width, r.height,
    )
}

/// One headstock curve as an SVG arc command. A negative sweep in the
/// layout's angle convention is a positive-angle (flag 1) arc in SVG's
/// y-down convention.
fn arc_path(arc: &ArcSegment) -> String {
    let (sx, sy) = arc.start_point();
    let (ex, ey) = arc.end_point();
    let flag = if arc.sweep_deg < 0.0 { 1 } else { 0 };
    format!(
        "M {:.4} {:.4} A {:.4} {:.4} 0 0 {} {:.4} {:.4}",
        sx, sy, arc.radius, arc.radius, flag, ex, ey,
    )
}
