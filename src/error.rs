//! Error types for simulation setup.
//!
//! Initialization from mesh data is the only fallible phase; once a state is
//! built, stepping never fails.

use std::fmt;

/// Errors that can occur while building a simulation from mesh data.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// A mesh vertex contained a NaN or infinite coordinate.
    NonFiniteVertex(usize),
    /// Configured particle mass was zero, negative, or non-finite.
    InvalidParticleMass(f32),
    /// The ground reference up vector could not be normalized.
    DegenerateGroundNormal,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NonFiniteVertex(index) => {
                write!(f, "mesh vertex {} has a non-finite coordinate", index)
            }
            InitError::InvalidParticleMass(mass) => {
                write!(f, "particle mass must be positive and finite, got {}", mass)
            }
            InitError::DegenerateGroundNormal => {
                write!(f, "ground reference up vector cannot be normalized")
            }
        }
    }
}

impl std::error::Error for InitError {}
