use std::fmt;
use thiserror::Error;

/// Identifies which buffer of a call an error relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// First operand of a clip operation.
    Subject,
    /// Second operand of a clip operation.
    Clip,
    /// Single operand of a decompose/triangulate call.
    Polygon,
    /// Buffer returned by the engine.
    Result,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operand::Subject => "subject",
            Operand::Clip => "clip",
            Operand::Polygon => "polygon",
            Operand::Result => "result",
        };
        f.write_str(s)
    }
}

/// Structural fault in a buffer handed back by a clip engine, or a failure the engine reported
/// itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineFault {
    #[error("negative {field} count: {count}")]
    NegativeCount { field: &'static str, count: i32 },

    #[error("null {field} array with {count} declared entries")]
    NullArray { field: &'static str, count: usize },

    #[error("{0}")]
    Reported(String),
}

/// Error of standalone marshaling, before an operation/operand context is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    #[error("failed to allocate {bytes} bytes")]
    Allocation { bytes: usize },

    #[error("{contours} contours but {holes} hole flags")]
    InvariantViolation { contours: usize, holes: usize },

    #[error("{count} entries of {element_size} bytes do not fit the native count type")]
    CountOverflow { count: usize, element_size: usize },
}

impl MarshalError {
    /// Attach the operation and operand being marshaled.
    pub fn in_context(self, operation: &'static str, operand: Operand) -> ClipError {
        match self {
            MarshalError::Allocation { bytes } => ClipError::Allocation {
                operation,
                operand,
                bytes,
            },
            MarshalError::CountOverflow {
                count,
                element_size,
            } => ClipError::Allocation {
                operation,
                operand,
                bytes: count.saturating_mul(element_size),
            },
            MarshalError::InvariantViolation { contours, holes } => ClipError::InvariantViolation {
                operation,
                operand,
                contours,
                holes,
            },
        }
    }
}

/// Errors surfaced by [crate::Clipper] operations.
///
/// None of these are retried: the engine state after a failed call is undefined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    #[error("{operation}: failed to allocate {bytes} bytes while marshaling the {operand} operand")]
    Allocation {
        operation: &'static str,
        operand: Operand,
        bytes: usize,
    },

    #[error("{operation}: clip engine failed on the {operand} buffer: {fault}")]
    Engine {
        operation: &'static str,
        operand: Operand,
        #[source]
        fault: EngineFault,
    },

    #[error("{operation}: {operand} operand has {contours} contours but {holes} hole flags")]
    InvariantViolation {
        operation: &'static str,
        operand: Operand,
        contours: usize,
        holes: usize,
    },
}

impl ClipError {
    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            ClipError::Allocation { operation, .. }
            | ClipError::Engine { operation, .. }
            | ClipError::InvariantViolation { operation, .. } => operation,
        }
    }

    /// Operand the failure relates to.
    pub fn operand(&self) -> Operand {
        match self {
            ClipError::Allocation { operand, .. }
            | ClipError::Engine { operand, .. }
            | ClipError::InvariantViolation { operand, .. } => *operand,
        }
    }
}

pub type ClipResult<T> = Result<T, ClipError>;
