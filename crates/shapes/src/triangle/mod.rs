//! Triangles and their validated subtypes.
//!
//! Model
//! - One `Triangle` type tagged with a `TriangleKind`. Subtype constructors
//!   build the full triangle, then run the kind's predicate exactly once;
//!   on failure no triangle is returned.
//! - Area uses Heron's formula on the three edge lengths. There is no
//!   degeneracy guard: collinear vertices give area ≈ 0, and rounding can
//!   push the radicand below zero (NaN unless `ShapeCfg::clamp_heron`).
//!
//! Code cross-refs: `kind::TriangleKind::holds`, `polygon::Polygon`

mod kind;

pub use kind::TriangleKind;

use tracing::debug;

use crate::cfg::ShapeCfg;
use crate::error::ShapeError;
use crate::point::Point;
use crate::polygon::{Polygon, Shape};

/// Triangle with edges `v1→v2`, `v2→v3`, `v3→v1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    outline: Polygon,
    kind: TriangleKind,
    cfg: ShapeCfg,
}

impl Triangle {
    /// Unclassified triangle with the default cfg.
    pub fn new(v1: Point, v2: Point, v3: Point) -> Self {
        Self::with_cfg(v1, v2, v3, ShapeCfg::default())
    }

    /// Unclassified triangle with a custom cfg.
    pub fn with_cfg(v1: Point, v2: Point, v3: Point, cfg: ShapeCfg) -> Self {
        let outline = Polygon::from_vertices(vec![v1, v2, v3]);
        Self {
            outline,
            kind: TriangleKind::Plain,
            cfg,
        }
    }

    /// Build a triangle and validate it as `kind`.
    pub fn classified(
        kind: TriangleKind,
        [v1, v2, v3]: [Point; 3],
        cfg: ShapeCfg,
    ) -> Result<Self, ShapeError> {
        let mut tri = Self::with_cfg(v1, v2, v3, cfg);
        let lengths = tri.edge_lengths();
        if !kind.holds(lengths, &cfg) {
            debug!(%kind, ?lengths, "classification rejected");
            return Err(ShapeError::Classification { kind, lengths });
        }
        tri.kind = kind;
        debug!(%kind, ?lengths, regular = tri.is_regular(), "triangle");
        Ok(tri)
    }

    pub fn isosceles(v1: Point, v2: Point, v3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleKind::Isosceles, [v1, v2, v3], ShapeCfg::default())
    }

    pub fn equilateral(v1: Point, v2: Point, v3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleKind::Equilateral, [v1, v2, v3], ShapeCfg::default())
    }

    pub fn scalene(v1: Point, v2: Point, v3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleKind::Scalene, [v1, v2, v3], ShapeCfg::default())
    }

    pub fn right(v1: Point, v2: Point, v3: Point) -> Result<Self, ShapeError> {
        Self::classified(TriangleKind::Right, [v1, v2, v3], ShapeCfg::default())
    }

    /// Kind validated at construction (`Plain` for `new`/`with_cfg`).
    #[inline]
    pub fn kind(&self) -> TriangleKind {
        self.kind
    }

    #[inline]
    pub fn cfg(&self) -> &ShapeCfg {
        &self.cfg
    }

    /// Edge lengths in edge order `[|v1v2|, |v2v3|, |v3v1|]`.
    pub fn edge_lengths(&self) -> [f64; 3] {
        let e = self.outline.edges();
        [e[0].length(), e[1].length(), e[2].length()]
    }

    /// Heron's formula: `s = (a+b+c)/2`, `sqrt(s(s−a)(s−b)(s−c))`.
    pub fn compute_area(&self) -> f64 {
        let [a, b, c] = self.edge_lengths();
        let s = (a + b + c) / 2.0;
        let radicand = s * (s - a) * (s - b) * (s - c);
        if self.cfg.clamp_heron {
            radicand.max(0.0).sqrt()
        } else {
            radicand.sqrt()
        }
    }
}

impl Shape for Triangle {
    #[inline]
    fn outline(&self) -> &Polygon {
        &self.outline
    }

    fn area(&self) -> Result<f64, ShapeError> {
        Ok(self.compute_area())
    }
}
