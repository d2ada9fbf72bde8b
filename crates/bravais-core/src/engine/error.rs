use thiserror::Error;

use crate::core::catalog::registry::LatticeNotFoundError;
use crate::core::geometry::basis::GeometryError;
use crate::core::models::parameters::UnknownParameterError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("{source}")]
    NotFound {
        #[from]
        source: LatticeNotFoundError,
    },

    #[error("{source}")]
    UnknownParameter {
        #[from]
        source: UnknownParameterError,
    },

    #[error("Degenerate unit cell: {reason}")]
    DegenerateCell { reason: String },

    #[error("Invalid repeat count {repeats}: must be zero or positive")]
    InvalidRepeatCount { repeats: i64 },

    #[error("Repeat count {repeats} with {atoms_per_cell} atom(s) per cell exceeds the limit of {limit} atoms")]
    TooManyAtoms {
        repeats: i64,
        atoms_per_cell: usize,
        limit: usize,
    },
}

impl From<GeometryError> for EngineError {
    fn from(error: GeometryError) -> Self {
        match error {
            GeometryError::DegenerateCell { reason } => EngineError::DegenerateCell { reason },
            GeometryError::InvalidRepeatCount { repeats } => {
                EngineError::InvalidRepeatCount { repeats }
            }
            GeometryError::TooManyAtoms {
                repeats,
                atoms_per_cell,
                limit,
            } => EngineError::TooManyAtoms {
                repeats,
                atoms_per_cell,
                limit,
            },
        }
    }
}
