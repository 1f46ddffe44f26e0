use serde::Serialize;

use crate::Point;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
}

/// A geometric stroke, fully determined by where the gesture started and ended.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShapeStroke {
    pub kind: ShapeKind,
    pub anchor: Point,
    pub terminus: Point,
    pub color: String,
}

impl ShapeStroke {
    /// Circles are centered on the anchor.
    pub fn radius(&self) -> f64 {
        self.anchor.distance_to(self.terminus)
    }

    /// Signed; negative when the terminus is left of the anchor.
    pub fn width(&self) -> f64 {
        self.terminus.x as f64 - self.anchor.x as f64
    }

    pub fn height(&self) -> f64 {
        self.terminus.y as f64 - self.anchor.y as f64
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FreehandStroke {
    pub color: String,
    pub points: Vec<Point>,
}

/// Which history stack a stroke lives on. Shapes always render beneath freehand ink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Shape,
    Freehand,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(kind: ShapeKind, anchor: (f32, f32), terminus: (f32, f32)) -> ShapeStroke {
        ShapeStroke {
            kind,
            anchor: Point::new(anchor.0, anchor.1),
            terminus: Point::new(terminus.0, terminus.1),
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn circle_radius_is_anchor_to_terminus_distance() {
        let circle = shape(ShapeKind::Circle, (10.0, 10.0), (13.0, 14.0));
        assert_eq!(circle.radius(), 5.0);
        assert_eq!(circle.anchor, Point::new(10.0, 10.0));
    }

    #[test]
    fn rectangle_extent_keeps_direction() {
        let rect = shape(ShapeKind::Rectangle, (20.0, 30.0), (5.0, 40.0));
        assert_eq!(rect.width(), -15.0);
        assert_eq!(rect.height(), 10.0);
    }

    #[test]
    fn degenerate_shape_has_zero_extent() {
        let dot = shape(ShapeKind::Circle, (7.0, 7.0), (7.0, 7.0));
        assert_eq!(dot.radius(), 0.0);
        assert_eq!(dot.width(), 0.0);
    }
}
