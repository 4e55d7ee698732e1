//! Core value types: points, bounding boxes, confidences and strokes.
//!
//! Coordinates are plain `f64` in the input surface's space (pixels or
//! device-independent units). The recognizer only ever compares ratios of
//! lengths, so no unit newtype is carried here.

use std::fmt;
use std::ops::{Add, Sub};

use glam::{DVec2, dvec2};
use serde::{Deserialize, Serialize};

use crate::errors::{NumericError, StrokeError};

/// A 2D sample or control point
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// View this point as a glam vector for arithmetic
    #[inline]
    pub fn to_vec(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation towards `other` (`t = 0` is `self`)
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self.to_vec().lerp(other.to_vec(), t).into()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Translate a point by a vector
impl Add<DVec2> for Point {
    type Output = Point;
    fn add(self, rhs: DVec2) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

/// Subtract two points to get the displacement between them
impl Sub<Point> for Point {
    type Output = DVec2;
    fn sub(self, rhs: Point) -> DVec2 {
        dvec2(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    /// Box spanning two opposite corners, in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        BBox {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Min/max reduction over all points. `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BBox { min: *first, max: *first };
        for p in rest {
            bbox.expand_point(*p);
        }
        Some(bbox)
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Larger of width and height
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    /// `min(w, h) / max(w, h)`, or 0 for a box with no extent
    pub fn aspect_ratio(&self) -> f64 {
        let max = self.max_dimension();
        if max <= 0.0 {
            return 0.0;
        }
        self.width().min(self.height()) / max
    }

    pub fn center(&self) -> Point {
        self.min.lerp(self.max, 0.5)
    }

    pub fn top_left(&self) -> Point {
        self.min
    }

    pub fn bottom_right(&self) -> Point {
        self.max
    }

    /// Grow by `margin` on every side
    pub fn expanded(&self, margin: f64) -> BBox {
        BBox {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Goodness-of-fit value in `0.0..=1.0`.
///
/// A heuristic score, not a calibrated probability.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0.0);
    pub const ONE: Confidence = Confidence(1.0);

    /// Create a Confidence with validation (rejects NaN and values outside 0..=1)
    pub fn try_new(val: f64) -> Result<Confidence, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if !(0.0..=1.0).contains(&val) {
            Err(NumericError::OutOfRange { value: val, min: 0.0, max: 1.0 })
        } else {
            Ok(Confidence(val))
        }
    }

    /// Saturate into `0.0..=1.0`. NaN maps to zero.
    #[inline]
    pub fn clamped(val: f64) -> Confidence {
        if val.is_nan() {
            Confidence::ZERO
        } else {
            Confidence(val.clamp(0.0, 1.0))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = NumericError;
    fn try_from(val: f64) -> Result<Self, Self::Error> {
        Confidence::try_new(val)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> f64 {
        c.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// The ordered samples of one pen-down → pen-up gesture.
///
/// Never empty and immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn try_new(points: Vec<Point>) -> Result<Self, StrokeError> {
        if points.is_empty() {
            return Err(StrokeError::Empty);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(StrokeError::NonFinite { index });
        }
        Ok(Stroke { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pen-down sample
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// Pen-up sample
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn bounding_box(&self) -> BBox {
        let mut bbox = BBox { min: self.first(), max: self.first() };
        for p in &self.points[1..] {
            bbox.expand_point(*p);
        }
        bbox
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for Stroke {
    type Error = StrokeError;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Stroke::try_new(points)
    }
}

impl From<Stroke> for Vec<Point> {
    fn from(stroke: Stroke) -> Self {
        stroke.points
    }
}

impl AsRef<[Point]> for Stroke {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Point tests ====================

    #[test]
    fn point_minus_point_gives_vector() {
        let d = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(d, dvec2(3.0, 4.0));
    }

    #[test]
    fn point_lerp_midpoint() {
        let mid = Point::new(0.0, 0.0).lerp(Point::new(4.0, 6.0), 0.5);
        assert_eq!(mid, Point::new(2.0, 3.0));
    }

    // ==================== BBox tests ====================

    #[test]
    fn bbox_from_points_empty_is_none() {
        assert_eq!(BBox::from_points(&[]), None);
    }

    #[test]
    fn bbox_from_points() {
        let bb = BBox::from_points(&[
            Point::new(3.0, 4.0),
            Point::new(1.0, 8.0),
            Point::new(5.0, 2.0),
        ])
        .unwrap();
        assert_eq!(bb.min, Point::new(1.0, 2.0));
        assert_eq!(bb.max, Point::new(5.0, 8.0));
        assert_eq!(bb.width(), 4.0);
        assert_eq!(bb.height(), 6.0);
        assert_eq!(bb.center(), Point::new(3.0, 5.0));
    }

    #[test]
    fn bbox_from_corners_normalizes() {
        let bb = BBox::from_corners(Point::new(10.0, 0.0), Point::new(0.0, 20.0));
        assert_eq!(bb.top_left(), Point::new(0.0, 0.0));
        assert_eq!(bb.bottom_right(), Point::new(10.0, 20.0));
    }

    #[test]
    fn bbox_aspect_ratio() {
        let bb = BBox::from_corners(Point::ORIGIN, Point::new(200.0, 100.0));
        assert_eq!(bb.aspect_ratio(), 0.5);
        let flat = BBox::from_corners(Point::ORIGIN, Point::new(200.0, 0.0));
        assert_eq!(flat.aspect_ratio(), 0.0);
        let dot = BBox::from_corners(Point::ORIGIN, Point::ORIGIN);
        assert_eq!(dot.aspect_ratio(), 0.0);
    }

    #[test]
    fn bbox_expanded_contains() {
        let bb = BBox::from_corners(Point::ORIGIN, Point::new(10.0, 10.0)).expanded(10.0);
        assert!(bb.contains(Point::new(-10.0, 20.0)));
        assert!(!bb.contains(Point::new(-10.1, 5.0)));
    }

    // ==================== Confidence tests ====================

    #[test]
    fn confidence_try_new_rejects_out_of_range() {
        assert!(Confidence::try_new(0.5).is_ok());
        assert!(matches!(Confidence::try_new(1.5), Err(NumericError::OutOfRange { .. })));
        assert_eq!(Confidence::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn confidence_clamped_saturates() {
        assert_eq!(Confidence::clamped(1.1), Confidence::ONE);
        assert_eq!(Confidence::clamped(-3.0), Confidence::ZERO);
        assert_eq!(Confidence::clamped(f64::NAN), Confidence::ZERO);
    }

    // ==================== Stroke tests ====================

    #[test]
    fn stroke_rejects_empty() {
        assert_eq!(Stroke::try_new(Vec::new()), Err(StrokeError::Empty));
    }

    #[test]
    fn stroke_rejects_non_finite() {
        let points = vec![Point::ORIGIN, Point::new(f64::INFINITY, 0.0)];
        assert_eq!(Stroke::try_new(points), Err(StrokeError::NonFinite { index: 1 }));
    }

    #[test]
    fn stroke_endpoints_and_bbox() {
        let stroke = Stroke::try_new(vec![
            Point::new(1.0, 1.0),
            Point::new(-2.0, 5.0),
            Point::new(3.0, 0.0),
        ])
        .unwrap();
        assert_eq!(stroke.first(), Point::new(1.0, 1.0));
        assert_eq!(stroke.last(), Point::new(3.0, 0.0));
        let bb = stroke.bounding_box();
        assert_eq!(bb.min, Point::new(-2.0, 0.0));
        assert_eq!(bb.max, Point::new(3.0, 5.0));
    }
}
