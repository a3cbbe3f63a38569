//! Polygon base and the `Shape` capability interface.
//!
//! Purpose
//! - `Polygon` owns the vertex ring and boundary edges of every shape and
//!   snapshots interior angles and regularity once at construction.
//! - `Shape` is implemented by every concrete shape; only `area` differs per
//!   kind, everything else reads through `outline()`.
//!
//! Limitations
//! - Interior angles use the law of cosines on the triangle
//!   `(v[i-1], v[i], v[i+1])`, which never reports a reflex angle. Results
//!   are exact for convex polygons only; concave orderings are not rejected.
//! - Regularity uses exact float comparison, no tolerance.
//! - Degenerate input is not rejected. A zero-length edge (`0/0`) or rounding
//!   on nearly collinear vertices (`acos` argument outside [-1, 1]) yields a
//!   NaN angle. Construction still succeeds; such a polygon is never regular
//!   and reports `has_nan_angles() == true`.

use tracing::{trace, warn};

use crate::error::ShapeError;
use crate::line::Line;
use crate::point::Point;

/// Ordered vertex ring with boundary edges and derived angle data.
///
/// Invariants (when built through `from_vertices` or a concrete shape):
/// - `edges.len() == vertices.len()`.
/// - `edges[i]` runs from `vertices[i]` to `vertices[(i + 1) % n]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Line>,
    inner_angles: Vec<f64>,
    is_regular: bool,
}

impl Polygon {
    /// Build from vertices and caller-supplied edges.
    ///
    /// Edge consistency with the vertex ring is the caller's responsibility
    /// and is not verified.
    pub fn new(vertices: Vec<Point>, edges: Vec<Line>) -> Self {
        let inner_angles = inner_angles(&vertices);
        let is_regular = check_regular(&edges, &inner_angles);
        Self {
            vertices,
            edges,
            inner_angles,
            is_regular,
        }
    }

    /// Build from vertices alone, connecting them cyclically.
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        let edges = cyclic_edges(&vertices);
        Self::new(vertices, edges)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    /// Interior angles in degrees, one per vertex, snapshotted at construction.
    #[inline]
    pub fn inner_angles(&self) -> &[f64] {
        &self.inner_angles
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.is_regular
    }

    /// Whether any interior angle fell outside the domain of the law of cosines.
    pub fn has_nan_angles(&self) -> bool {
        self.inner_angles.iter().any(|a| a.is_nan())
    }

    /// Sum of edge lengths, recomputed on every call.
    pub fn perimeter(&self) -> f64 {
        self.edges.iter().map(Line::length).sum()
    }

    /// A bare polygon has no area formula.
    pub fn area(&self) -> Result<f64, ShapeError> {
        Err(ShapeError::unimplemented("area"))
    }
}

/// Capability interface shared by all shapes.
pub trait Shape {
    /// Underlying vertex ring and derived data.
    fn outline(&self) -> &Polygon;

    fn area(&self) -> Result<f64, ShapeError>;

    #[inline]
    fn vertices(&self) -> &[Point] {
        self.outline().vertices()
    }

    #[inline]
    fn edges(&self) -> &[Line] {
        self.outline().edges()
    }

    #[inline]
    fn inner_angles(&self) -> &[f64] {
        self.outline().inner_angles()
    }

    #[inline]
    fn is_regular(&self) -> bool {
        self.outline().is_regular()
    }

    #[inline]
    fn has_nan_angles(&self) -> bool {
        self.outline().has_nan_angles()
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        self.outline().perimeter()
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.outline().vertices().len()
    }
}

impl Shape for Polygon {
    #[inline]
    fn outline(&self) -> &Polygon {
        self
    }

    fn area(&self) -> Result<f64, ShapeError> {
        Polygon::area(self)
    }
}

/// Edges `v[i] → v[(i+1) mod n]`.
pub(crate) fn cyclic_edges(vertices: &[Point]) -> Vec<Line> {
    let n = vertices.len();
    (0..n)
        .map(|i| Line::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// Interior angle (degrees) at `p2` between `p1` and `p3` via the law of cosines.
#[inline]
pub fn vertex_angle(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    let a = p1.distance_to(p2);
    let b = p2.distance_to(p3);
    let c = p1.distance_to(p3);
    ((a.powi(2) + b.powi(2) - c.powi(2)) / (2.0 * a * b))
        .acos()
        .to_degrees()
}

fn inner_angles(vertices: &[Point]) -> Vec<f64> {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let prev = &vertices[(i + n - 1) % n];
            let next = &vertices[(i + 1) % n];
            let angle = vertex_angle(prev, &vertices[i], next);
            if angle.is_nan() {
                warn!(vertex = i, "degenerate vertex, inner angle is NaN");
            } else {
                trace!(vertex = i, angle, "inner_angle");
            }
            angle
        })
        .collect()
}

fn check_regular(edges: &[Line], angles: &[f64]) -> bool {
    if edges.len() < 3 {
        return false;
    }
    let first_length = edges[0].length();
    let Some(&first_angle) = angles.first() else {
        return false;
    };
    edges.iter().all(|e| e.length() == first_length) && angles.iter().all(|&a| a == first_angle)
}
