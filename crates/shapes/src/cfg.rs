//! Numeric policy shared by all shapes.
//!
//! Defaults are fixed constants. A custom `ShapeCfg` only needs to be passed
//! where a caller wants a different right-angle tolerance or clamped Heron
//! areas for degenerate triangles.

/// Tolerance for the Pythagorean check `|c² − (a² + b²)| < eps` of right triangles.
pub const RIGHT_EPS: f64 = 1e-9;

/// Shape configuration (tolerances and area policy).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCfg {
    /// Right-triangle tolerance on squared lengths.
    pub eps_right: f64,
    /// Clamp a negative Heron radicand to zero instead of yielding NaN.
    ///
    /// Near-degenerate triangles can produce `s(s−a)(s−b)(s−c) < 0` through
    /// rounding alone.
    pub clamp_heron: bool,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            eps_right: RIGHT_EPS,
            clamp_heron: false,
        }
    }
}

impl ShapeCfg {
    /// Default cfg with Heron clamping enabled.
    #[inline]
    pub fn clamped() -> Self {
        Self {
            clamp_heron: true,
            ..Self::default()
        }
    }
}
