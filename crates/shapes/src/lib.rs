//! Small 2D polygon shape model.
//!
//! Points, line segments, and convex polygon shapes (rectangles, squares,
//! triangles and their subtypes) with area, perimeter, interior angles and a
//! regularity flag.
//!
//! Policy
//! - Derived geometry (angles, regularity) is computed once at construction.
//! - Points are copied by value into lines and shapes; mutating a caller's
//!   `Point` never changes an already-built shape.
//! - Equality checks for regularity and triangle classification are exact
//!   float comparisons. Only the right-triangle check uses a tolerance
//!   (`ShapeCfg::eps_right`).

pub mod any;
pub mod cfg;
pub mod error;
pub mod line;
pub mod point;
pub mod polygon;
pub mod rect;
pub mod triangle;

#[cfg(test)]
mod tests;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use any::AnyShape;
pub use cfg::ShapeCfg;
pub use error::ShapeError;
pub use line::Line;
pub use point::Point;
pub use polygon::{Polygon, Shape};
pub use rect::{Rectangle, Square};
pub use triangle::{Triangle, TriangleKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::{
        AnyShape, Line, Point, Polygon, Rectangle, Shape, ShapeCfg, ShapeError, Square, Triangle,
        TriangleKind,
    };
}
