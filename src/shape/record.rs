//! Structured encoding of a shape for persistence.
//!
//! The record is flat (`type` + two control points + style) so that every
//! shape kind shares one schema. Decoding re-validates everything the typed
//! model guarantees.

use serde::{Deserialize, Serialize};

use crate::errors::ShapeError;
use crate::types::Point;

use super::{Color, Shape, ShapeId, ShapeKind, ShapeType, Style};

/// Wire form of a [`Shape`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    pub id: ShapeId,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub start_point: Point,
    pub end_point: Point,
    pub stroke_color: Color,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
}

impl From<Shape> for ShapeRecord {
    fn from(shape: Shape) -> Self {
        let (start_point, end_point) = shape.kind.control_points();
        ShapeRecord {
            id: shape.id,
            shape_type: shape.shape_type(),
            start_point,
            end_point,
            stroke_color: shape.style.stroke_color,
            stroke_width: shape.style.stroke_width(),
            fill_color: shape.style.fill_color,
        }
    }
}

impl TryFrom<ShapeRecord> for Shape {
    type Error = ShapeError;

    fn try_from(record: ShapeRecord) -> Result<Self, Self::Error> {
        record.stroke_color.validate()?;
        if let Some(fill) = &record.fill_color {
            fill.validate()?;
        }
        let style = Style::default()
            .with_stroke_color(record.stroke_color)
            .with_fill(record.fill_color)
            .with_stroke_width(record.stroke_width)?;
        let kind =
            ShapeKind::from_control_points(record.shape_type, record.start_point, record.end_point);
        Shape::with_id(record.id, kind, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(shape_type: ShapeType) -> ShapeRecord {
        ShapeRecord {
            id: ShapeId(Uuid::nil()),
            shape_type,
            start_point: Point::new(0.0, 0.0),
            end_point: Point::new(10.0, 5.0),
            stroke_color: Color::BLACK,
            stroke_width: 3.0,
            fill_color: None,
        }
    }

    #[test]
    fn record_round_trips_through_shape() {
        let mut rec = record(ShapeType::Circle);
        rec.fill_color = Some(Color::WHITE);
        let shape = Shape::try_from(rec.clone()).unwrap();
        assert_eq!(shape.shape_type(), ShapeType::Circle);
        assert_eq!(ShapeRecord::from(shape), rec);
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let mut rec = record(ShapeType::Arrow);
        rec.end_point = rec.start_point;
        assert_eq!(
            Shape::try_from(rec),
            Err(ShapeError::DegenerateSegment { kind: ShapeType::Arrow })
        );
    }

    #[test]
    fn invalid_style_is_rejected() {
        let mut rec = record(ShapeType::Line);
        rec.stroke_width = -1.0;
        assert!(matches!(Shape::try_from(rec), Err(ShapeError::StrokeWidth(_))));

        let mut rec = record(ShapeType::Line);
        rec.fill_color = Some(Color { r: 2.0, g: 0.0, b: 0.0, a: 1.0 });
        assert!(matches!(
            Shape::try_from(rec),
            Err(ShapeError::ColorComponent { component: "r", .. })
        ));
    }
}
