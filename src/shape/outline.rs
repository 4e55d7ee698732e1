//! Renderable outlines for committed shapes.
//!
//! An [`Outline`] is a small path description that any rendering backend can
//! walk: move/line commands plus whole ellipses. It can also be written as SVG
//! path data or flattened back into an ordered point sequence.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use crate::types::Point;

/// One path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    /// A closed axis-aligned ellipse; starts and ends at its rightmost point
    Ellipse { center: Point, rx: f64, ry: f64 },
    /// Line back to the start of the current subpath
    Close,
}

/// Outline of a shape, built like SVG path data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    elements: Vec<PathElement>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.elements.push(PathElement::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.elements.push(PathElement::LineTo(p));
        self
    }

    pub fn ellipse(mut self, center: Point, rx: f64, ry: f64) -> Self {
        self.elements.push(PathElement::Ellipse { center, rx, ry });
        self
    }

    pub fn close(mut self) -> Self {
        self.elements.push(PathElement::Close);
        self
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// SVG `d` attribute for this outline.
    ///
    /// Ellipses become two half-arcs so the result also works in renderers
    /// without an ellipse primitive.
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::new();
        for el in &self.elements {
            // Writing into a String cannot fail
            let _ = match *el {
                PathElement::MoveTo(p) => write!(d, "M{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathElement::LineTo(p) => write!(d, "L{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathElement::Ellipse { center, rx, ry } => {
                    let (rx_s, ry_s) = (fmt_num(rx), fmt_num(ry));
                    let right = fmt_num(center.x + rx);
                    let left = fmt_num(center.x - rx);
                    let cy = fmt_num(center.y);
                    write!(
                        d,
                        "M{right},{cy}A{rx_s},{ry_s} 0 1,1 {left},{cy}A{rx_s},{ry_s} 0 1,1 {right},{cy}Z"
                    )
                }
                PathElement::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// Flatten the outline into an ordered point sequence.
    ///
    /// Straight runs are split into pieces no longer than `spacing`; ellipses
    /// use a step count that is a multiple of four so their extreme points are
    /// always sampled. A non-positive `spacing` keeps only the vertices.
    pub fn sample(&self, spacing: f64) -> Vec<Point> {
        let spacing = if spacing.is_finite() && spacing > 0.0 {
            spacing
        } else {
            f64::INFINITY
        };
        let mut out = Vec::new();
        let mut subpath_start: Option<Point> = None;
        let mut current: Option<Point> = None;

        for el in &self.elements {
            match *el {
                PathElement::MoveTo(p) => {
                    out.push(p);
                    subpath_start = Some(p);
                    current = Some(p);
                }
                PathElement::LineTo(p) => {
                    if let Some(from) = current {
                        push_segment(&mut out, from, p, spacing);
                    } else {
                        out.push(p);
                        subpath_start = Some(p);
                    }
                    current = Some(p);
                }
                PathElement::Close => {
                    if let (Some(from), Some(start)) = (current, subpath_start) {
                        push_segment(&mut out, from, start, spacing);
                        current = Some(start);
                    }
                }
                PathElement::Ellipse { center, rx, ry } => {
                    let steps = ellipse_steps(rx, ry, spacing);
                    for k in 0..=steps {
                        let theta = TAU * k as f64 / steps as f64;
                        out.push(Point::new(center.x + rx * theta.cos(), center.y + ry * theta.sin()));
                    }
                    let start = Point::new(center.x + rx, center.y);
                    subpath_start = Some(start);
                    current = Some(start);
                }
            }
        }
        out
    }
}

fn push_segment(out: &mut Vec<Point>, from: Point, to: Point, spacing: f64) {
    let len = crate::geometry::distance(from, to);
    let pieces = ((len / spacing).ceil() as usize).max(1);
    for k in 1..=pieces {
        out.push(from.lerp(to, k as f64 / pieces as f64));
    }
}

fn ellipse_steps(rx: f64, ry: f64, spacing: f64) -> usize {
    let (a, b) = (rx.abs(), ry.abs());
    // Ramanujan's approximation of the perimeter
    let perimeter = PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt());
    let steps = (perimeter / spacing).ceil() as usize;
    steps.max(8).next_multiple_of(4)
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(200.0), "200");
        assert_eq!(fmt_num(7.499999999999999), "7.5");
        assert_eq!(fmt_num(-7.5), "-7.5");
        assert_eq!(fmt_num(187.00961894323342), "187.01");
        assert_eq!(fmt_num(1_000_000.0), "1000000");
        assert_eq!(fmt_num(-0.0000001), "-0.0000001");
    }

    #[test]
    fn svg_path_for_polyline() {
        let outline = Outline::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 0.0))
            .line_to(Point::new(10.0, 5.5))
            .close();
        assert_eq!(outline.to_svg_path_data(), "M0,0L10,0L10,5.5Z");
    }

    #[test]
    fn svg_path_for_ellipse() {
        let outline = Outline::new().ellipse(Point::new(50.0, 25.0), 50.0, 25.0);
        assert_eq!(
            outline.to_svg_path_data(),
            "M100,25A50,25 0 1,1 0,25A50,25 0 1,1 100,25Z"
        );
    }

    #[test]
    fn sample_splits_segments_by_spacing() {
        let outline = Outline::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(30.0, 0.0));
        let points = outline.sample(10.0);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(30.0, 0.0),
            ]
        );
    }

    #[test]
    fn sample_close_returns_to_start() {
        let outline = Outline::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(20.0, 0.0))
            .line_to(Point::new(20.0, 20.0))
            .close();
        let points = outline.sample(100.0);
        assert_eq!(points.first(), points.last());
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn sample_ellipse_hits_extremes() {
        let outline = Outline::new().ellipse(Point::new(0.0, 0.0), 40.0, 20.0);
        let points = outline.sample(7.0);
        let max_y = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        let min_x = points.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        assert!((max_y - 20.0).abs() < 1e-9);
        assert!((min_x + 40.0).abs() < 1e-9);
        assert_eq!((points.len() - 1) % 4, 0);
    }

    #[test]
    fn sample_with_bad_spacing_keeps_vertices() {
        let outline = Outline::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(30.0, 0.0));
        assert_eq!(outline.sample(0.0).len(), 2);
        assert_eq!(outline.sample(f64::NAN).len(), 2);
    }
}
