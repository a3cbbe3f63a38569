//! Triangle classification predicates over edge lengths.

use std::fmt;

use crate::cfg::ShapeCfg;

/// Triangle subtype, each with a predicate on the three edge lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    /// No constraint.
    Plain,
    /// At least two lengths exactly equal.
    Isosceles,
    /// All three lengths exactly equal.
    Equilateral,
    /// No two lengths equal.
    Scalene,
    /// Sorted `a <= b <= c` with `|c² − (a² + b²)| < eps_right`.
    Right,
}

impl TriangleKind {
    pub const ALL: [TriangleKind; 5] = [
        TriangleKind::Plain,
        TriangleKind::Isosceles,
        TriangleKind::Equilateral,
        TriangleKind::Scalene,
        TriangleKind::Right,
    ];

    /// Whether `lengths` satisfy this kind's predicate.
    ///
    /// Isosceles/equilateral/scalene compare with `==`; only `Right` uses
    /// `cfg.eps_right`.
    pub fn holds(self, lengths: [f64; 3], cfg: &ShapeCfg) -> bool {
        let [a, b, c] = lengths;
        match self {
            TriangleKind::Plain => true,
            TriangleKind::Isosceles => a == b || b == c || a == c,
            TriangleKind::Equilateral => a == b && b == c,
            TriangleKind::Scalene => !(a == b || b == c || a == c),
            TriangleKind::Right => {
                let mut sorted = lengths;
                sorted.sort_by(f64::total_cmp);
                let [a, b, c] = sorted;
                (c.powi(2) - (a.powi(2) + b.powi(2))).abs() < cfg.eps_right
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TriangleKind::Plain => "Plain",
            TriangleKind::Isosceles => "Isosceles",
            TriangleKind::Equilateral => "Equilateral",
            TriangleKind::Scalene => "Scalene",
            TriangleKind::Right => "Right",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
