//! Error types with diagnostics using miette
//!
//! The recognizer itself never fails: "no match" is `None`. These errors
//! cover the validated constructors around it (strokes, styles, decoded
//! shape records, configuration).

use miette::Diagnostic;
use thiserror::Error;

use crate::shape::ShapeType;

/// Error type for invalid numeric values
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    #[diagnostic(code(inkshape::numeric::nan))]
    NaN,

    #[error("value is infinite")]
    #[diagnostic(code(inkshape::numeric::infinite))]
    Infinite,

    #[error("value must be positive, got {value}")]
    #[diagnostic(code(inkshape::numeric::not_positive))]
    NotPositive { value: f64 },

    #[error("value {value} is outside {min}..={max}")]
    #[diagnostic(code(inkshape::numeric::out_of_range))]
    OutOfRange { value: f64, min: f64, max: f64 },
}

// ============================================================================
// Stroke Errors
// ============================================================================

/// Errors building a [`Stroke`](crate::Stroke)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StrokeError {
    #[error("a stroke needs at least one sample point")]
    #[diagnostic(
        code(inkshape::stroke::empty),
        help("input capture delivers one point per pen sample, starting at pen-down")
    )]
    Empty,

    #[error("sample {index} has a non-finite coordinate")]
    #[diagnostic(code(inkshape::stroke::non_finite))]
    NonFinite { index: usize },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors constructing or decoding a [`Shape`](crate::Shape)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{kind} needs distinct start and end points")]
    #[diagnostic(
        code(inkshape::shape::degenerate_segment),
        help("lines and arrows must have a non-zero length")
    )]
    DegenerateSegment { kind: ShapeType },

    #[error("invalid stroke width")]
    #[diagnostic(code(inkshape::shape::stroke_width))]
    StrokeWidth(#[source] NumericError),

    #[error("invalid color component `{component}`")]
    #[diagnostic(
        code(inkshape::shape::color_component),
        help("color components are normalized to 0.0..=1.0")
    )]
    ColorComponent {
        component: &'static str,
        #[source]
        cause: NumericError,
    },

    #[error("invalid hex color: {input:?}")]
    #[diagnostic(
        code(inkshape::shape::hex_color),
        help("use #rgb, #rrggbb or #rrggbbaa")
    )]
    HexColor { input: String },
}

// ============================================================================
// Config Errors
// ============================================================================

/// Errors from validating a [`RecognizerConfig`](crate::RecognizerConfig)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid threshold")]
    #[diagnostic(
        code(inkshape::config::threshold),
        help("the threshold is a confidence in 0.0..=1.0")
    )]
    Threshold(#[source] NumericError),

    #[error("min_points must be at least 3, got {value}")]
    #[diagnostic(
        code(inkshape::config::min_points),
        help("the arrow scorer needs three samples to measure a turning angle")
    )]
    MinPoints { value: usize },

    #[error("invalid min_box_size")]
    #[diagnostic(code(inkshape::config::min_box_size))]
    MinBoxSize(#[source] NumericError),
}
