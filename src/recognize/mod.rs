//! Single-stroke shape recognition.
//!
//! A finished stroke is gated (enough samples, not a tap), scored by every
//! [`Scorer`], and the best score strictly above the threshold wins. The
//! winner is turned into a canonical [`Shape`]: bounding-box corners for
//! rectangles and circles, the literal first and last samples for lines and
//! arrows.

pub mod defaults;
pub mod scorers;

use crate::config::RecognizerConfig;
use crate::errors::ConfigError;
use crate::geometry::bounding_box;
use crate::shape::{Shape, ShapeKind, ShapeType};
use crate::types::{BBox, Confidence, Point};

pub use scorers::{AnyScorer, ArrowScorer, CircleScorer, LineScorer, RectangleScorer, SCORERS, Scorer};

/// One confidence per shape type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scores {
    pub line: Confidence,
    pub rectangle: Confidence,
    pub circle: Confidence,
    pub arrow: Confidence,
}

impl Scores {
    pub fn get(&self, shape_type: ShapeType) -> Confidence {
        match shape_type {
            ShapeType::Line => self.line,
            ShapeType::Rectangle => self.rectangle,
            ShapeType::Circle => self.circle,
            ShapeType::Arrow => self.arrow,
        }
    }

    fn set(&mut self, shape_type: ShapeType, value: Confidence) {
        match shape_type {
            ShapeType::Line => self.line = value,
            ShapeType::Rectangle => self.rectangle = value,
            ShapeType::Circle => self.circle = value,
            ShapeType::Arrow => self.arrow = value,
        }
    }

    /// `(type, score)` pairs in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeType, Confidence)> + '_ {
        ShapeType::ALL.into_iter().map(move |ty| (ty, self.get(ty)))
    }

    /// Highest score; on a tie the type evaluated first wins
    pub fn best(&self) -> RecognitionResult {
        let mut best = RecognitionResult { shape_type: ShapeType::Line, confidence: self.line };
        for (shape_type, confidence) in self.iter().skip(1) {
            if confidence > best.confidence {
                best = RecognitionResult { shape_type, confidence };
            }
        }
        best
    }

    /// The best result, if it scores strictly above `threshold`
    pub fn best_above(&self, threshold: f64) -> Option<RecognitionResult> {
        let best = self.best();
        (best.confidence.raw() > threshold).then_some(best)
    }
}

/// The winning type and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognitionResult {
    pub shape_type: ShapeType,
    pub confidence: Confidence,
}

/// Everything a UI needs to present a proposal
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub shape: Shape,
    pub result: RecognitionResult,
    pub scores: Scores,
}

/// Stateless recognizer. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
}

impl Recognizer {
    /// Create a recognizer without validating `config`
    pub fn new(config: RecognizerConfig) -> Self {
        Recognizer { config }
    }

    pub fn try_new(config: RecognizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Recognizer { config })
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Bounding box of a stroke that passes the size gates
    fn gate(&self, points: &[Point]) -> Option<BBox> {
        if points.len() < self.config.min_points {
            crate::log::trace!(
                points = points.len(),
                min_points = self.config.min_points,
                "stroke too short"
            );
            return None;
        }
        let bbox = bounding_box(points)?;
        let min = self.config.min_box_size;
        if bbox.width() <= min && bbox.height() <= min {
            crate::log::trace!(
                width = bbox.width(),
                height = bbox.height(),
                min_box_size = min,
                "stroke too small"
            );
            return None;
        }
        Some(bbox)
    }

    fn score_with(points: &[Point], bbox: &BBox) -> Scores {
        let mut scores = Scores::default();
        for scorer in SCORERS {
            scores.set(scorer.shape_type(), scorer.score(points, bbox));
        }
        crate::log::debug!(
            line = scores.line.raw(),
            rectangle = scores.rectangle.raw(),
            circle = scores.circle.raw(),
            arrow = scores.arrow.raw(),
            "stroke scored"
        );
        scores
    }

    /// All four scores, or `None` if the stroke fails the size gates
    pub fn scores(&self, points: &[Point]) -> Option<Scores> {
        let bbox = self.gate(points)?;
        Some(Self::score_with(points, &bbox))
    }

    /// Best shape type above the threshold
    pub fn classify(&self, points: &[Point]) -> Option<RecognitionResult> {
        self.scores(points)?.best_above(self.config.threshold)
    }

    /// Canonical shape for the stroke, if one is confident enough
    pub fn recognize(&self, points: &[Point]) -> Option<Shape> {
        self.recognize_detailed(points).map(|r| r.shape)
    }

    /// Like [`recognize`](Self::recognize), keeping the scores
    pub fn recognize_detailed(&self, points: &[Point]) -> Option<Recognition> {
        let bbox = self.gate(points)?;
        let scores = Self::score_with(points, &bbox);
        let Some(result) = scores.best_above(self.config.threshold) else {
            crate::log::debug!(threshold = self.config.threshold, "no confident match");
            return None;
        };
        crate::log::debug!(
            winner = %result.shape_type,
            confidence = result.confidence.raw(),
            "stroke recognized"
        );
        let shape = synthesize(result.shape_type, points, &bbox)?;
        Some(Recognition { shape, result, scores })
    }
}

fn synthesize(shape_type: ShapeType, points: &[Point], bbox: &BBox) -> Option<Shape> {
    match shape_type {
        ShapeType::Rectangle => Some(Shape::rectangle(bbox.top_left(), bbox.bottom_right())),
        ShapeType::Circle => Some(Shape::circle(bbox.top_left(), bbox.bottom_right())),
        ShapeType::Line | ShapeType::Arrow => {
            let (first, last) = (*points.first()?, *points.last()?);
            Shape::new(ShapeKind::from_control_points(shape_type, first, last)).ok()
        }
    }
}
