use std::{error::Error, fmt::Display};

/// Failure of control points solving or curve sampling. Both kinds are final for given input,
/// calling again with the same data gives the same error.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Input can not describe a curve: too few points, non-finite coordinates,
    /// non-positive number of samples or mismatched control points.
    InvalidInput(String),
    /// Continuity equations do not have a unique solution.
    SingularSystem,
}

impl Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::InvalidInput(message) => {
                write!(f, "Error in curve: invalid input, {}", message)
            }
            CurveError::SingularSystem => {
                write!(f, "Error in curve: continuity system is singular")
            }
        }
    }
}

impl Error for CurveError {}
