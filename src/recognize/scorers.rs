//! Per-shape scorers.
//!
//! Each scorer answers one question independently: "how much does this stroke
//! look like a ___?" Every scorer sees the same samples and the same
//! precomputed bounding box and returns a [`Confidence`]. Numeric edge cases
//! (zero chord, zero-size box) return zero early instead of dividing.

use enum_dispatch::enum_dispatch;

use crate::geometry::{
    closedness, distance, point_to_rect_perimeter_distance, point_to_segment_distance,
    turning_angle,
};
use crate::shape::ShapeType;
use crate::types::{BBox, Confidence, Point};

use super::defaults;

/// Common behavior for all scorers
#[enum_dispatch]
pub trait Scorer {
    /// The shape type this scorer votes for
    fn shape_type(&self) -> ShapeType;

    /// Confidence that `points` (with bounding box `bbox`) is this shape.
    /// An empty slice scores zero.
    fn score(&self, points: &[Point], bbox: &BBox) -> Confidence;
}

/// Straight segment from first to last sample
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScorer;

/// Axis-aligned rectangle along the bounding box
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleScorer;

/// Circle inscribed in the bounding box
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleScorer;

/// Line with a sharp turn near its end
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowScorer;

/// Any scorer, dispatched statically
#[enum_dispatch(Scorer)]
#[derive(Debug, Clone, Copy)]
pub enum AnyScorer {
    LineScorer,
    RectangleScorer,
    CircleScorer,
    ArrowScorer,
}

/// All scorers in evaluation order
pub const SCORERS: [AnyScorer; 4] = [
    AnyScorer::LineScorer(LineScorer),
    AnyScorer::RectangleScorer(RectangleScorer),
    AnyScorer::CircleScorer(CircleScorer),
    AnyScorer::ArrowScorer(ArrowScorer),
];

fn endpoints(points: &[Point]) -> Option<(Point, Point)> {
    Some((*points.first()?, *points.last()?))
}

fn mean(points: &[Point], f: impl Fn(Point) -> f64) -> f64 {
    points.iter().map(|p| f(*p)).sum::<f64>() / points.len() as f64
}

impl Scorer for LineScorer {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
    }

    fn score(&self, points: &[Point], _bbox: &BBox) -> Confidence {
        let Some((first, last)) = endpoints(points) else {
            return Confidence::ZERO;
        };
        let chord = distance(first, last);
        if chord <= defaults::MIN_LINE_CHORD {
            return Confidence::ZERO;
        }
        let deviation = mean(points, |p| point_to_segment_distance(p, first, last)) / chord;
        Confidence::clamped(1.0 - defaults::LINE_DEVIATION_WEIGHT * deviation)
    }
}

impl Scorer for RectangleScorer {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn score(&self, points: &[Point], bbox: &BBox) -> Confidence {
        let Some((first, last)) = endpoints(points) else {
            return Confidence::ZERO;
        };
        let max_dim = bbox.max_dimension();
        if max_dim <= 0.0 || bbox.aspect_ratio() < defaults::MIN_RECT_ASPECT {
            return Confidence::ZERO;
        }
        let spread = mean(points, |p| point_to_rect_perimeter_distance(p, bbox)) / max_dim;
        let raw = (1.0 - defaults::RECT_DISTANCE_WEIGHT * spread).max(0.0);
        Confidence::clamped(raw * closedness(first, last, bbox))
    }
}

impl Scorer for CircleScorer {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn score(&self, points: &[Point], bbox: &BBox) -> Confidence {
        let Some((first, last)) = endpoints(points) else {
            return Confidence::ZERO;
        };
        if bbox.aspect_ratio() < defaults::MIN_CIRCLE_ASPECT {
            return Confidence::ZERO;
        }
        let center = bbox.center();
        let avg_radius = (bbox.width() + bbox.height()) / 4.0;
        if avg_radius <= defaults::MIN_CIRCLE_RADIUS {
            return Confidence::ZERO;
        }
        let variance = mean(points, |p| (distance(p, center) - avg_radius).abs()) / avg_radius;
        let raw = (1.0 - defaults::CIRCLE_VARIANCE_WEIGHT * variance).max(0.0);
        Confidence::clamped(raw * closedness(first, last, bbox))
    }
}

impl Scorer for ArrowScorer {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Arrow
    }

    fn score(&self, points: &[Point], bbox: &BBox) -> Confidence {
        let line = LineScorer.score(points, bbox).raw();
        if line < defaults::MIN_ARROW_LINE_SCORE {
            return Confidence::ZERO;
        }

        let quarter = points.len() / 4;
        if quarter < 3 {
            return Confidence::clamped(line * defaults::SHORT_TAIL_PENALTY);
        }
        let tail = &points[points.len() - quarter..];
        let has_head = tail
            .windows(3)
            .any(|w| turning_angle(w[0], w[1], w[2]) > defaults::ARROWHEAD_TURN);

        let factor = if has_head {
            defaults::ARROWHEAD_REWARD
        } else {
            defaults::NO_ARROWHEAD_PENALTY
        };
        Confidence::clamped(line * factor)
    }
}
