//! Closed set of shape variants.

use crate::error::ShapeError;
use crate::polygon::{Polygon, Shape};
use crate::rect::{Rectangle, Square};
use crate::triangle::{Triangle, TriangleKind};

/// Any shape in the model, held by value.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Polygon(Polygon),
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
}

impl AnyShape {
    /// Human-readable kind, including the triangle subtype.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AnyShape::Polygon(_) => "Polygon",
            AnyShape::Rectangle(_) => "Rectangle",
            AnyShape::Square(_) => "Square",
            AnyShape::Triangle(t) => match t.kind() {
                TriangleKind::Plain => "Triangle",
                kind => kind.name(),
            },
        }
    }

    #[inline]
    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            AnyShape::Polygon(s) => s,
            AnyShape::Rectangle(s) => s,
            AnyShape::Square(s) => s,
            AnyShape::Triangle(s) => s,
        }
    }
}

impl Shape for AnyShape {
    #[inline]
    fn outline(&self) -> &Polygon {
        self.as_shape().outline()
    }

    fn area(&self) -> Result<f64, ShapeError> {
        self.as_shape().area()
    }
}

impl From<Polygon> for AnyShape {
    fn from(s: Polygon) -> Self {
        AnyShape::Polygon(s)
    }
}

impl From<Rectangle> for AnyShape {
    fn from(s: Rectangle) -> Self {
        AnyShape::Rectangle(s)
    }
}

impl From<Square> for AnyShape {
    fn from(s: Square) -> Self {
        AnyShape::Square(s)
    }
}

impl From<Triangle> for AnyShape {
    fn from(s: Triangle) -> Self {
        AnyShape::Triangle(s)
    }
}
