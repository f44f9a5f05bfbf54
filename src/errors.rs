//! Geometry errors

use crate::float_types::Real;

/// The three broad classes every [`GeometryError`] falls into.
///
/// None of them is recoverable at the point it is raised: the caller decides
/// whether to re-roll the inputs (for example with a new seed) or give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter is outside its documented domain.
    InvalidArgument,
    /// The geometry itself cannot be processed (no ear, zero-length vector, ...).
    DegenerateGeometry,
    /// The inputs handed over by another stage are inconsistent.
    PreconditionViolation,
}

/// All the possible issues we might encounter while generating, triangulating or extruding
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (OddDivisions) The outline generator needs an even number of divisions
    #[error("(OddDivisions) divisions must be even, got {0}")]
    OddDivisions(usize),
    /// (ZeroDivisions) The outline generator needs at least two divisions
    #[error("(ZeroDivisions) divisions must be at least 2")]
    ZeroDivisions,
    /// (NonFiniteParameter) A generator parameter is NaN or infinite
    #[error("(NonFiniteParameter) {name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: Real },
    /// (NonPositiveThickness) Extrusion thickness must be strictly positive and finite
    #[error("(NonPositiveThickness) thickness must be positive and finite, got {0}")]
    NonPositiveThickness(Real),
    /// (ZeroBevelRings) At least one bevel division is needed to connect the caps
    #[error("(ZeroBevelRings) bevel_rings must be at least 1")]
    ZeroBevelRings,
    /// (RingLengthMismatch) Two rings being bridged have different point counts
    #[error("(RingLengthMismatch) rings must have the same length ({first} != {second})")]
    RingLengthMismatch { first: usize, second: usize },
    /// (IndexOverflow) The mesh would need more vertices than a `u32` index can address
    #[error("(IndexOverflow) {0} vertices cannot be addressed with u32 indices")]
    IndexOverflow(usize),

    /// (NoEarFound) A full pass over the working list produced no valid ear
    #[error("(NoEarFound) no valid ear among {remaining} remaining points; the outline is probably not simple")]
    NoEarFound { remaining: usize },
    /// (ZeroLengthVector) A zero-length vector was normalized
    #[error("(ZeroLengthVector) cannot normalize a zero-length vector")]
    ZeroLengthVector,
    /// (StraightCorner) An outline corner has no turn, so its bevel direction is undefined
    #[error("(StraightCorner) outline point {0} has no turn; bevel direction is undefined")]
    StraightCorner(usize),
    /// Indicates an inconsistency while building a parry triangle mesh
    #[error("(TriMesh) {0}")]
    TriMesh(String),

    /// (TooFewPoints) An outline needs at least three points
    #[error("(TooFewPoints) an outline needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    /// (IndexOutOfRange) A triangle references a point that does not exist
    #[error("(IndexOutOfRange) index {index} is out of range (points.len = {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// (TriangleCountMismatch) The triangulation does not belong to this outline
    #[error("(TriangleCountMismatch) expected {expected} triangles for the outline, got {actual}")]
    TriangleCountMismatch { expected: usize, actual: usize },
    /// (UvCountMismatch) Vertex and UV buffers are not index-aligned
    #[error("(UvCountMismatch) {positions} positions but {uvs} uvs")]
    UvCountMismatch { positions: usize, uvs: usize },
}

impl GeometryError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        use GeometryError::*;

        match self {
            OddDivisions(_)
            | ZeroDivisions
            | NonFiniteParameter { .. }
            | NonPositiveThickness(_)
            | ZeroBevelRings
            | RingLengthMismatch { .. }
            | IndexOverflow(_) => ErrorKind::InvalidArgument,

            NoEarFound { .. } | ZeroLengthVector | StraightCorner(_) | TriMesh(_) => {
                ErrorKind::DegenerateGeometry
            },

            TooFewPoints(_)
            | IndexOutOfRange { .. }
            | TriangleCountMismatch { .. }
            | UvCountMismatch { .. } => ErrorKind::PreconditionViolation,
        }
    }
}
