//! 2D points.

use std::fmt;

use nalgebra::Vector2;

/// A point in the plane. Coordinates are unconstrained reals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    coords: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.coords.x = x;
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.coords.y = y;
    }

    /// Euclidean distance `sqrt((x1-x2)² + (y1-y2)²)`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.coords - other.coords).norm()
    }

    /// Point shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::from(self.coords + Vector2::new(dx, dy))
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        self.coords
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(coords: Vector2<f64>) -> Self {
        Self { coords }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.coords
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        let p = Point::default();
        assert_eq!((p.x(), p.y()), (0.0, 0.0));
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut p = Point::new(1.0, 2.0);
        p.set_x(-3.5);
        p.set_y(7.25);
        assert_eq!(p, Point::new(-3.5, 7.25));
    }

    #[test]
    fn distance_3_4_5() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn vector_round_trip_and_offset() {
        let p = Point::from((1.5, -2.0));
        assert_eq!(Vector2::from(p), Vector2::new(1.5, -2.0));
        assert_eq!(p.to_vector(), Vector2::from(p));
        assert_eq!(Point::from(p.to_vector()), p);
        assert_eq!(p.offset(2.0, 2.0), Point::new(3.5, 0.0));
        assert_eq!(p.to_string(), "(1.5, -2)");
    }
}
