//! This module has the polygon set data model: contours, polygon sets with hole flags, and the set
//! operations that can be applied between them.
mod contour;
mod set;

pub use contour::*;
pub use set::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// Set operation applied as `subject OP clip`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClipOperation {
    /// Area of the subject not covered by the clip polygon. Operand order matters.
    Difference,
    /// Area covered by both polygons.
    Intersection,
    /// Area covered by either polygon.
    Union,
    /// Area covered by exactly one of the polygons.
    Xor,
}

impl ClipOperation {
    /// Operation name used in error context and logging.
    pub fn name(self) -> &'static str {
        match self {
            ClipOperation::Difference => "difference",
            ClipOperation::Intersection => "intersection",
            ClipOperation::Union => "union",
            ClipOperation::Xor => "xor",
        }
    }
}

impl fmt::Display for ClipOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
