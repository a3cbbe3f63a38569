//! Axis-aligned rectangles and squares.
//!
//! Corner order is fixed: bottom-left → bottom-right → top-right → top-left.
//! Corners are not validated; a "top-right" left of or below "bottom-left"
//! yields negative width/height and a negative area.

use tracing::debug;

use crate::error::ShapeError;
use crate::point::Point;
use crate::polygon::{Polygon, Shape};

/// Axis-aligned rectangle spanned by two opposite corners.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    outline: Polygon,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(bottom_left: Point, top_right: Point) -> Self {
        let width = top_right.x() - bottom_left.x();
        let height = top_right.y() - bottom_left.y();
        let outline = Polygon::from_vertices(vec![
            bottom_left,
            Point::new(top_right.x(), bottom_left.y()),
            top_right,
            Point::new(bottom_left.x(), top_right.y()),
        ]);
        debug!(width, height, regular = outline.is_regular(), "rectangle");
        Self {
            outline,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        self.outline.vertices()[0]
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        self.outline.vertices()[2]
    }

    /// `width * height` (signed for inverted corners).
    #[inline]
    pub fn compute_area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    #[inline]
    fn outline(&self) -> &Polygon {
        &self.outline
    }

    fn area(&self) -> Result<f64, ShapeError> {
        Ok(self.compute_area())
    }
}

/// Square as a rectangle with equal width and height.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Square with corner `bottom_left` and top-right `bottom_left + (side, side)`.
    pub fn new(bottom_left: Point, side: f64) -> Self {
        Self {
            rect: Rectangle::new(bottom_left, bottom_left.offset(side, side)),
        }
    }

    /// Side length as realized by the corners (`width`), which can differ
    /// from the requested side by rounding of `bottom_left + side`.
    #[inline]
    pub fn side(&self) -> f64 {
        self.rect.width()
    }

    #[inline]
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }

    #[inline]
    pub fn into_rectangle(self) -> Rectangle {
        self.rect
    }

    #[inline]
    pub fn compute_area(&self) -> f64 {
        self.side().powi(2)
    }
}

impl Shape for Square {
    #[inline]
    fn outline(&self) -> &Polygon {
        self.rect.outline()
    }

    fn area(&self) -> Result<f64, ShapeError> {
        Ok(self.compute_area())
    }
}
