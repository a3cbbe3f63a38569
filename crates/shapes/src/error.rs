//! Errors surfaced by shape construction and queries.

use std::fmt;

use crate::triangle::TriangleKind;

/// Errors surfaced by the shape model.
///
/// Arithmetic domain problems (e.g. a negative Heron radicand) are not
/// translated; they show up as NaN results instead.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The operation has no formula for this shape (area of a bare polygon).
    Unimplemented { operation: &'static str },
    /// A triangle's edge lengths violate the predicate of the requested kind.
    Classification { kind: TriangleKind, lengths: [f64; 3] },
}

impl ShapeError {
    pub(crate) fn unimplemented(operation: &'static str) -> Self {
        Self::Unimplemented { operation }
    }

    /// Kind named by a classification failure, if any.
    pub fn violated_kind(&self) -> Option<TriangleKind> {
        match self {
            Self::Classification { kind, .. } => Some(*kind),
            Self::Unimplemented { .. } => None,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unimplemented { operation } => {
                write!(f, "{operation} is not implemented for a bare polygon")
            }
            Self::Classification { kind, lengths } => write!(
                f,
                "not a {kind} triangle: edge lengths {:?} fail the {kind} predicate",
                lengths
            ),
        }
    }
}

impl std::error::Error for ShapeError {}
