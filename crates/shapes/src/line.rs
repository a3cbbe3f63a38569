//! Line segments with a cached length.

use crate::point::Point;

/// Segment between two points.
///
/// Invariant: `length == start.distance_to(&end)`. The endpoints are owned
/// copies, so the only way to move an endpoint is through the setters, which
/// refresh the cached length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    length: f64,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(&end),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn set_start(&mut self, start: Point) {
        self.start = start;
        self.length = self.compute_length();
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn set_end(&mut self, end: Point) {
        self.end = end;
        self.length = self.compute_length();
    }

    /// Cached length (O(1)).
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Fresh distance between the endpoints.
    #[inline]
    pub fn compute_length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}
