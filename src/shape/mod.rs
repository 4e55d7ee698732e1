//! The canonical shape model.
//!
//! A [`Shape`] is what replaces a recognized stroke on the page: a type, two
//! control points and a style. Each [`ShapeKind`] variant carries only the
//! geometry it needs, and knows how to draw ([`Shape::path`]) and hit-test
//! ([`Shape::contains`]) itself.

mod outline;
mod record;
mod style;

use std::f64::consts::FRAC_PI_6;
use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ShapeError;
use crate::types::{BBox, Point};

pub use outline::{Outline, PathElement};
pub use record::ShapeRecord;
pub use style::{Color, DEFAULT_STROKE_WIDTH, Style};

/// Length of each arrowhead barb, independent of the arrow's own length
pub const ARROWHEAD_LENGTH: f64 = 15.0;

/// Angle between the shaft and each arrowhead barb (30°)
pub const ARROWHEAD_ANGLE: f64 = FRAC_PI_6;

/// Slack around a shape's bounding box for erase/select hit tests
pub const HIT_MARGIN: f64 = 10.0;

/// The primitive kinds the recognizer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Line,
    Rectangle,
    Circle,
    Arrow,
}

impl ShapeType {
    /// All types, in scorer evaluation order (also the tie-break order)
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Line,
        ShapeType::Rectangle,
        ShapeType::Circle,
        ShapeType::Arrow,
    ];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Line => "Line",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Circle => "Circle",
            ShapeType::Arrow => "Arrow",
        }
    }

    /// Icon identifier for toolbars and confirmation prompts
    pub fn icon(self) -> &'static str {
        match self {
            ShapeType::Line => "line.diagonal",
            ShapeType::Rectangle => "rectangle",
            ShapeType::Circle => "circle",
            ShapeType::Arrow => "arrow.up.right",
        }
    }

    /// Whether both control points are literal segment endpoints
    pub fn is_segment(self) -> bool {
        matches!(self, ShapeType::Line | ShapeType::Arrow)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape identifier - random UUID, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geometry of a shape, per type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// A segment from start to end
    Line { start: Point, end: Point },
    /// A segment with an arrowhead at `end`
    Arrow { start: Point, end: Point },
    /// An axis-aligned rectangle spanning two opposite corners
    Rectangle { corner_a: Point, corner_b: Point },
    /// An ellipse inscribed in the box spanning two opposite corners
    Circle { corner_a: Point, corner_b: Point },
}

impl ShapeKind {
    /// Build the kind for `shape_type` from its two control points
    pub fn from_control_points(shape_type: ShapeType, start: Point, end: Point) -> Self {
        match shape_type {
            ShapeType::Line => ShapeKind::Line { start, end },
            ShapeType::Arrow => ShapeKind::Arrow { start, end },
            ShapeType::Rectangle => ShapeKind::Rectangle { corner_a: start, corner_b: end },
            ShapeType::Circle => ShapeKind::Circle { corner_a: start, corner_b: end },
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Line { .. } => ShapeType::Line,
            ShapeKind::Arrow { .. } => ShapeType::Arrow,
            ShapeKind::Rectangle { .. } => ShapeType::Rectangle,
            ShapeKind::Circle { .. } => ShapeType::Circle,
        }
    }

    /// `(start_point, end_point)`
    pub fn control_points(&self) -> (Point, Point) {
        match *self {
            ShapeKind::Line { start, end } | ShapeKind::Arrow { start, end } => (start, end),
            ShapeKind::Rectangle { corner_a, corner_b }
            | ShapeKind::Circle { corner_a, corner_b } => (corner_a, corner_b),
        }
    }

    /// Segments need distinct endpoints; boxes may be degenerate
    pub fn validate(&self) -> Result<(), ShapeError> {
        let (start, end) = self.control_points();
        let kind = self.shape_type();
        if kind.is_segment() && start == end {
            return Err(ShapeError::DegenerateSegment { kind });
        }
        Ok(())
    }
}

/// A committed geometric primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ShapeRecord", try_from = "ShapeRecord")]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    style: Style,
}

impl Shape {
    /// Create a shape with a fresh id and the default style
    pub fn new(kind: ShapeKind) -> Result<Self, ShapeError> {
        Self::with_id(ShapeId::new(), kind, Style::default())
    }

    /// Reassemble a shape whose id was assigned elsewhere (e.g. on decode)
    pub fn with_id(id: ShapeId, kind: ShapeKind, style: Style) -> Result<Self, ShapeError> {
        kind.validate()?;
        Ok(Shape { id, kind, style })
    }

    pub fn line(start: Point, end: Point) -> Result<Self, ShapeError> {
        Self::new(ShapeKind::Line { start, end })
    }

    pub fn arrow(start: Point, end: Point) -> Result<Self, ShapeError> {
        Self::new(ShapeKind::Arrow { start, end })
    }

    pub fn rectangle(corner_a: Point, corner_b: Point) -> Self {
        Shape {
            id: ShapeId::new(),
            kind: ShapeKind::Rectangle { corner_a, corner_b },
            style: Style::default(),
        }
    }

    pub fn circle(corner_a: Point, corner_b: Point) -> Self {
        Shape {
            id: ShapeId::new(),
            kind: ShapeKind::Circle { corner_a, corner_b },
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn start_point(&self) -> Point {
        self.kind.control_points().0
    }

    pub fn end_point(&self) -> Point {
        self.kind.control_points().1
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Box spanned by the two control points
    pub fn bounding_box(&self) -> BBox {
        let (a, b) = self.kind.control_points();
        BBox::from_corners(a, b)
    }

    /// Renderable outline of this shape
    pub fn path(&self) -> Outline {
        match self.kind {
            ShapeKind::Rectangle { .. } => {
                let b = self.bounding_box();
                Outline::new()
                    .move_to(b.min)
                    .line_to(Point::new(b.max.x, b.min.y))
                    .line_to(b.max)
                    .line_to(Point::new(b.min.x, b.max.y))
                    .close()
            }
            ShapeKind::Circle { .. } => {
                let b = self.bounding_box();
                Outline::new().ellipse(b.center(), b.width() / 2.0, b.height() / 2.0)
            }
            ShapeKind::Line { start, end } => Outline::new().move_to(start).line_to(end),
            ShapeKind::Arrow { start, end } => {
                let shaft = Outline::new().move_to(start).line_to(end);
                match arrowhead(start, end) {
                    Some((barb_a, barb_b)) => shaft.move_to(barb_a).line_to(end).line_to(barb_b),
                    None => shaft,
                }
            }
        }
    }

    /// Generous hit test: inside the bounding box grown by [`HIT_MARGIN`]
    pub fn contains(&self, point: Point) -> bool {
        self.bounding_box().expanded(HIT_MARGIN).contains(point)
    }
}

/// Tips of the two arrowhead barbs, or `None` for a zero-length shaft
fn arrowhead(start: Point, end: Point) -> Option<(Point, Point)> {
    let back = (start - end).try_normalize()?;
    let barb = |angle: f64| end + DVec2::from_angle(angle).rotate(back) * ARROWHEAD_LENGTH;
    Some((barb(ARROWHEAD_ANGLE), barb(-ARROWHEAD_ANGLE)))
}
