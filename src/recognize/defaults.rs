//! Heuristic constants for the recognizer. Hand-tuned, not learned.

/// Confidence a candidate must strictly exceed to be proposed
pub const THRESHOLD: f64 = 0.75;
/// Fewer samples than this are never recognized
pub const MIN_POINTS: usize = 10;
/// Strokes whose box is at most this wide *and* high are taps, not shapes
pub const MIN_BOX_SIZE: f64 = 10.0;

/// Chord lengths at or below this are jitter, not lines
pub const MIN_LINE_CHORD: f64 = 20.0;
pub const LINE_DEVIATION_WEIGHT: f64 = 5.0;

/// Rectangles thinner than this (short side / long side) are slivers
pub const MIN_RECT_ASPECT: f64 = 0.1;
pub const RECT_DISTANCE_WEIGHT: f64 = 3.0;

/// Circles must be roughly as wide as they are high
pub const MIN_CIRCLE_ASPECT: f64 = 0.6;
pub const MIN_CIRCLE_RADIUS: f64 = 10.0;
pub const CIRCLE_VARIANCE_WEIGHT: f64 = 2.0;

/// An arrow must first score at least this as a line
pub const MIN_ARROW_LINE_SCORE: f64 = 0.5;
/// Turning angle in the final quarter that counts as an arrowhead (45°)
pub const ARROWHEAD_TURN: f64 = std::f64::consts::FRAC_PI_4;
pub const ARROWHEAD_REWARD: f64 = 1.1;
pub const NO_ARROWHEAD_PENALTY: f64 = 0.7;
pub const SHORT_TAIL_PENALTY: f64 = 0.5;
