//! Error type for field construction and reconfiguration.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The host could not resolve a drawing surface to measure.
    SurfaceUnavailable,
    /// The surface was found but its size is zero, negative or non-finite.
    InvalidBounds { width: f32, height: f32 },
    /// A reconfiguration asked for a different particle count than the field owns.
    FixedCardinality { current: usize, requested: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::SurfaceUnavailable => write!(f, "no drawing surface available"),
            FieldError::InvalidBounds { width, height } => {
                write!(f, "drawing surface has unusable size {width}x{height}")
            }
            FieldError::FixedCardinality { current, requested } => write!(
                f,
                "particle count is fixed at {current} for the field lifetime (requested {requested})"
            ),
        }
    }
}

impl std::error::Error for FieldError {}
