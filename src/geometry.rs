//! Geometry primitives shared by the scorers: distances, bounding boxes,
//! turning angles and the closedness measure.
//!
//! Everything here is a pure function of its arguments.

use crate::types::{BBox, Point};

/// Euclidean distance
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.to_vec().distance(p2.to_vec())
}

/// Distance from `point` to the closest point on the segment `seg_start..seg_end`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either end
/// measure to that endpoint rather than to the infinite line.
pub fn point_to_segment_distance(point: Point, seg_start: Point, seg_end: Point) -> f64 {
    let seg = seg_end - seg_start;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return distance(point, seg_start);
    }
    let t = ((point - seg_start).dot(seg) / len_sq).clamp(0.0, 1.0);
    let closest = seg_start + seg * t;
    distance(point, closest)
}

/// Distance from `point` to the perimeter of `rect`.
///
/// Outside the box this is the usual clamped per-axis distance. Inside, it is
/// the distance to the nearest of the four edges, so a stroke hugging the
/// boundary from within scores as well as one just outside it.
pub fn point_to_rect_perimeter_distance(point: Point, rect: &BBox) -> f64 {
    if rect.contains(point) {
        let left = point.x - rect.min.x;
        let right = rect.max.x - point.x;
        let top = point.y - rect.min.y;
        let bottom = rect.max.y - point.y;
        return left.min(right).min(top).min(bottom);
    }
    let dx = (rect.min.x - point.x).max(0.0).max(point.x - rect.max.x);
    let dy = (rect.min.y - point.y).max(0.0).max(point.y - rect.max.y);
    dx.hypot(dy)
}

/// Bounding box of a point sequence. `None` for an empty sequence.
#[inline]
pub fn bounding_box(points: &[Point]) -> Option<BBox> {
    BBox::from_points(points)
}

/// Unsigned angle in radians between `p2 - p1` and `p3 - p2`, in `[0, π]`.
///
/// Zero when the path keeps going straight, π when it doubles back.
pub fn turning_angle(p1: Point, p2: Point, p3: Point) -> f64 {
    let v1 = p2 - p1;
    let v2 = p3 - p2;
    v1.perp_dot(v2).atan2(v1.dot(v2)).abs()
}

/// How nearly the stroke's pen-up point returns to its pen-down point.
///
/// `1 - gap / max_dimension`, clamped to `[0, 1]`. A closed loop scores near 1,
/// an open curve near 0. A box with no extent scores 0.
pub fn closedness(first: Point, last: Point, bbox: &BBox) -> f64 {
    let max_dim = bbox.max_dimension();
    if max_dim <= 0.0 {
        return 0.0;
    }
    (1.0 - distance(first, last) / max_dim).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(pt(0.0, 0.0), pt(3.0, 4.0)), 5.0);
    }

    #[test]
    fn segment_distance_perpendicular() {
        assert_eq!(point_to_segment_distance(pt(5.0, 3.0), pt(0.0, 0.0), pt(10.0, 0.0)), 3.0);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        // Beyond the end: distance to (10, 0), not to the infinite line
        assert_eq!(point_to_segment_distance(pt(13.0, 4.0), pt(0.0, 0.0), pt(10.0, 0.0)), 5.0);
        assert_eq!(point_to_segment_distance(pt(-3.0, -4.0), pt(0.0, 0.0), pt(10.0, 0.0)), 5.0);
    }

    #[test]
    fn segment_distance_degenerate_segment() {
        assert_eq!(point_to_segment_distance(pt(3.0, 4.0), pt(0.0, 0.0), pt(0.0, 0.0)), 5.0);
    }

    #[test]
    fn rect_perimeter_distance_outside() {
        let rect = BBox::from_corners(pt(0.0, 0.0), pt(10.0, 10.0));
        assert_eq!(point_to_rect_perimeter_distance(pt(15.0, 5.0), &rect), 5.0);
        assert_eq!(point_to_rect_perimeter_distance(pt(13.0, 14.0), &rect), 5.0);
    }

    #[test]
    fn rect_perimeter_distance_inside_uses_nearest_edge() {
        let rect = BBox::from_corners(pt(0.0, 0.0), pt(100.0, 50.0));
        assert_eq!(point_to_rect_perimeter_distance(pt(50.0, 45.0), &rect), 5.0);
        assert_eq!(point_to_rect_perimeter_distance(pt(2.0, 25.0), &rect), 2.0);
        assert_eq!(point_to_rect_perimeter_distance(pt(100.0, 20.0), &rect), 0.0);
    }

    #[test]
    fn bounding_box_of_empty_is_none() {
        assert!(bounding_box(&[]).is_none());
    }

    #[test]
    fn turning_angle_straight_and_reversed() {
        assert!(approx(turning_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)), 0.0));
        assert!(approx(turning_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 0.0)), PI));
    }

    #[test]
    fn turning_angle_is_direction_agnostic() {
        let left = turning_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0));
        let right = turning_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, -1.0));
        assert!(approx(left, FRAC_PI_2));
        assert!(approx(right, FRAC_PI_2));
        assert!(approx(turning_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 1.0)), FRAC_PI_4));
    }

    #[test]
    fn closedness_loop_and_open() {
        let bbox = BBox::from_corners(pt(0.0, 0.0), pt(100.0, 50.0));
        assert_eq!(closedness(pt(0.0, 0.0), pt(0.0, 0.0), &bbox), 1.0);
        assert_eq!(closedness(pt(0.0, 0.0), pt(25.0, 0.0), &bbox), 0.75);
        assert_eq!(closedness(pt(0.0, 0.0), pt(100.0, 50.0), &bbox), 0.0);
    }

    #[test]
    fn closedness_zero_size_box() {
        let bbox = BBox::from_corners(pt(1.0, 1.0), pt(1.0, 1.0));
        assert_eq!(closedness(pt(1.0, 1.0), pt(1.0, 1.0), &bbox), 0.0);
    }
}
