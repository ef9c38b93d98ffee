//! # Neck Geometry Module
//!
//! Closed-form layout of the neck: fret lines, string lines, marker
//! dots, nut, outline, and the two headstock arc segments. Everything is
//! computed once from the string and fret counts and returned as plain
//! serializable data, so a renderer never has to do layout math of its
//! own.
//!
//! Units are abstract neck inches; all the decorative constants are
//! fudged for aesthetics. Coordinates are y-down with the nut face at
//! x = 0. Arc angles follow the convention of the drawing layer the
//! layout feeds: 0 degrees at 3 o'clock, positive counter-clockwise.

use serde::{Deserialize, Serialize};

/// Marker dot diameter.
pub const MARKER_DIAMETER: f32 = 0.25;
/// Thickness of the nut block.
pub const NUT_THICKNESS: f32 = 0.1875;
/// Distance between adjacent strings.
pub const STRING_SPACING: f32 = 0.375;
/// y distance from the edge of the neck to the outer strings.
pub const STRING_EDGE_OFFSET: f32 = 0.06;
/// Scale length of the instrument.
pub const SCALE_LENGTH: f32 = 25.5;
/// The fret-placement constant: each fret sits 1/17.817 of the remaining
/// scale length past the previous one.
pub const FRET_SCALE_DIVISOR: f32 = 17.817;
/// Radius of the headstock edge curves.
pub const HEADSTOCK_RADIUS: f32 = 2.0;
/// Frets that carry a marker dot; multiples of 12 carry a double dot.
pub const MARKER_FRETS: [usize; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// A filled dot, located by its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A circular arc: center, radius, start angle, and signed sweep, in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub start_deg: f32,
    pub sweep_deg: f32,
}

impl ArcSegment {
    /// Point on the arc's circle at `deg` (0 at 3 o'clock, positive
    /// counter-clockwise, y-down).
    pub fn point_at(&self, deg: f32) -> (f32, f32) {
        let rad = deg.to_radians();
        (
            self.cx + self.radius * rad.cos(),
            self.cy - self.radius * rad.sin(),
        )
    }

    /// Arc start point.
    pub fn start_point(&self) -> (f32, f32) {
        self.point_at(self.start_deg)
    }

    /// Arc end point.
    pub fn end_point(&self) -> (f32, f32) {
        self.point_at(self.start_deg + self.sweep_deg)
    }
}

/// The complete neck geometry for a given string and fret count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeckLayout {
    /// x of the nut face and of each fret; `fret_xs[0]` is 0.
    pub fret_xs: Vec<f32>,
    /// y of each string line, lightest (top) string first.
    pub string_ys: Vec<f32>,
    /// Width of the neck across the nut.
    pub nut_width: f32,
    /// x for open-string note markers, left of the nut.
    pub open_x: f32,
    /// One line per fret, nut excluded.
    pub fret_lines: Vec<Line>,
    /// One line per string, running from the headstock to the last fret.
    pub string_lines: Vec<Line>,
    /// Decorative marker dots, doubled at the octave frets.
    pub markers: Vec<Dot>,
    /// Fretboard outline.
    pub outline: Rect,
    /// The nut block.
    pub nut: Rect,
    /// Upper and lower headstock edge curves.
    pub headstock: [ArcSegment; 2],
}

impl NeckLayout {
    /// Compute the layout for `strings` strings and `frets` frets.
    ///
    /// Fret positions follow the rule of 17.817: each fret sits at
    /// `prev + (scale - prev) / 17.817`, which lands the 12th fret at
    /// half the scale length.
    pub fn new(strings: usize, frets: u8) -> Self {
        let frets = frets as usize;
        let string_span = (strings - 1) as f32 * STRING_SPACING;
        let nut_width = string_span + STRING_EDGE_OFFSET * 2.0;

        let mut fret_xs = Vec::with_capacity(frets + 1);
        fret_xs.push(0.0);
        let mut offset = 0.0;
        for _ in 0..frets {
            let pos = offset + (SCALE_LENGTH - offset) / FRET_SCALE_DIVISOR;
            fret_xs.push(pos);
            offset = pos;
        }

        let fret_lines = fret_xs[1..]
            .iter()
            .map(|&x| Line {
                x1: x,
                y1: nut_width,
                x2: x,
                y2: 0.0,
            })
            .collect();

        let y_mid = nut_width / 2.0;
        let dy = nut_width / 4.0;
        let mut markers = Vec::new();
        for &n in MARKER_FRETS.iter() {
            if n > frets {
                break;
            }
            let x = fret_xs[n - 1] + (fret_xs[n] - fret_xs[n - 1]) / 2.0;
            if n % 12 == 0 {
                markers.push(Dot {
                    x,
                    y: y_mid - dy,
                    diameter: MARKER_DIAMETER,
                });
                markers.push(Dot {
                    x,
                    y: y_mid + dy,
                    diameter: MARKER_DIAMETER,
                });
            } else {
                markers.push(Dot {
                    x,
                    y: y_mid,
                    diameter: MARKER_DIAMETER,
                });
            }
        }

        // Strings overhang the nut by half the first fret width so the
        // open-string markers have somewhere to sit.
        let end_x = fret_xs[frets];
        let left_x = -NUT_THICKNESS - fret_xs[1] / 2.0;
        let mut string_ys = Vec::with_capacity(strings);
        let mut string_lines = Vec::with_capacity(strings);
        for n in 0..strings {
            let y = STRING_EDGE_OFFSET + STRING_SPACING * n as f32;
            string_ys.push(y);
            string_lines.push(Line {
                x1: left_x,
                y1: y,
                x2: end_x,
                y2: y,
            });
        }

        let outline = Rect {
            x: 0.0,
            y: 0.0,
            width: end_x,
            height: nut_width,
        };
        let nut = Rect {
            x: -NUT_THICKNESS,
            y: 0.0,
            width: NUT_THICKNESS,
            height: nut_width,
        };

        // Partial headstock: two radius-2 curves leaving the nut corners,
        // swept just far enough to clear the open-note markers.
        let r = HEADSTOCK_RADIUS;
        let d = fret_xs[1] / 2.0;
        let sweep = (d / r).asin().to_degrees();
        let headstock = [
            ArcSegment {
                cx: -NUT_THICKNESS,
                cy: -r,
                radius: r,
                start_deg: 270.0,
                sweep_deg: -sweep,
            },
            ArcSegment {
                cx: -NUT_THICKNESS,
                cy: nut_width + r,
                radius: r,
                start_deg: 90.0,
                sweep_deg: sweep,
            },
        ];

        // Midpoint between the nut face and the arc ends.
        let open_x = (-NUT_THICKNESS - d) / 2.0;

        Self {
            fret_xs,
            string_ys,
            nut_width,
            open_x,
            fret_lines,
            string_lines,
            markers,
            outline,
            nut,
            headstock,
        }
    }

    /// Number of frets covered by this layout.
    pub fn frets(&self) -> usize {
        self.fret_xs.len() - 1
    }

    /// x of the center of the space behind `fret` (1-based; fret 0 has no
    /// such space, open markers use `open_x`).
    pub fn marker_center(&self, fret: usize) -> f32 {
        (self.fret_xs[fret - 1] + self.fret_xs[fret]) / 2.0
    }

    /// Marker center for any (string, fret) position; fret 0 maps to the
    /// open-string column left of the nut.
    pub fn note_point(&self, string: usize, fret: usize) -> (f32, f32) {
        let x = if fret == 0 {
            self.open_x
        } else {
            self.marker_center(fret)
        };
        (x, self.string_ys[string])
    }
}
