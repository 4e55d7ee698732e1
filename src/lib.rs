//! Recognize hand-drawn strokes as clean geometric shapes.
//!
//! A stroke is the ordered list of samples from one pen-down to pen-up
//! gesture. [`Recognizer`] scores it as a line, rectangle, circle and arrow,
//! and if the best score clears the threshold synthesizes a canonical
//! [`Shape`] to replace the ink. [`Session`] wraps that in a propose/confirm
//! flow so nothing replaces the user's ink without their say-so.
//!
//! ```
//! use inkshape::{Point, ShapeType};
//!
//! let points: Vec<Point> = (0..20).map(|i| Point::new(i as f64 * 15.0, 0.0)).collect();
//! let shape = inkshape::recognize(&points, 0.75).expect("a straight stroke");
//! assert_eq!(shape.shape_type(), ShapeType::Line);
//! assert_eq!(shape.end_point(), Point::new(285.0, 0.0));
//! ```

pub mod config;
pub mod errors;
pub mod geometry;
mod log;
pub mod recognize;
pub mod shape;
pub mod types;
pub mod workflow;

pub use config::{InkMode, RecognizerConfig, RejectPolicy};
pub use errors::{ConfigError, NumericError, ShapeError, StrokeError};
pub use recognize::{Recognition, RecognitionResult, Recognizer, Scores};
pub use shape::{
    Color, Outline, PathElement, Shape, ShapeId, ShapeKind, ShapeRecord, ShapeType, Style,
};
pub use types::{BBox, Confidence, Point, Stroke};
pub use workflow::{Commit, Confirmer, Page, PendingDecision, Session, StrokeOutcome};

/// Recognize a single stroke with the default gates and the given threshold.
///
/// Returns `None` when the stroke is too short, too small, or no shape
/// scores strictly above `threshold`.
pub fn recognize(points: &[Point], threshold: f64) -> Option<Shape> {
    Recognizer::new(RecognizerConfig::with_threshold(threshold)).recognize(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizer_is_shareable() {
        fn assert_send_sync_copy<T: Send + Sync + Copy>() {}
        assert_send_sync_copy::<Recognizer>();
        assert_send_sync_copy::<Session>();
    }

    #[test]
    fn threshold_parameter_is_respected() {
        let points: Vec<Point> = (0..20).map(|i| Point::new(i as f64 * 15.0, 0.0)).collect();
        assert!(recognize(&points, 0.99).is_some());
        assert!(recognize(&points, 1.0).is_none());
    }
}
