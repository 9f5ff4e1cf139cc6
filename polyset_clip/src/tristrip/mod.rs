//! Triangle strips returned by the clip engine and the triangle list/indexed mesh forms they are
//! assembled into for rendering.
mod assembly;

pub use assembly::*;

use crate::core::math::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of triangle strips.
///
/// A strip of `L >= 3` points encodes `L - 2` triangles, shorter strips encode none.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tristrip {
    pub strips: Vec<Vec<Vector2>>,
}

impl Tristrip {
    #[inline]
    pub fn new() -> Self {
        Tristrip { strips: Vec::new() }
    }

    /// Number of strips.
    #[inline]
    pub fn len(&self) -> usize {
        self.strips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Number of triangles encoded by all strips.
    pub fn triangle_count(&self) -> usize {
        self.strips.iter().map(|s| s.len().saturating_sub(2)).sum()
    }
}

impl From<Vec<Vec<Vector2>>> for Tristrip {
    fn from(strips: Vec<Vec<Vector2>>) -> Self {
        Tristrip { strips }
    }
}

/// Triangle given by its three corner points, in winding order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p0: Vector2,
    pub p1: Vector2,
    pub p2: Vector2,
}

impl Triangle {
    #[inline]
    pub fn new(p0: Vector2, p1: Vector2, p2: Vector2) -> Self {
        Triangle { p0, p1, p2 }
    }

    /// Signed area, positive when `p0, p1, p2` wind counter clockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        (self.p1 - self.p0).perp_dot(self.p2 - self.p0) / 2.0
    }
}

/// Deduplicated vertex list plus triangle index triples into it.
///
/// Triple order defines the winding of each triangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexedMesh {
    pub vertices: Vec<Vector2>,
    pub indices: Vec<[usize; 3]>,
}

impl IndexedMesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Resolve the triangle at `index` to its points.
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let [a, b, c] = *self.indices.get(index)?;
        Some(Triangle::new(
            *self.vertices.get(a)?,
            *self.vertices.get(b)?,
            *self.vertices.get(c)?,
        ))
    }

    /// Iterate all triangles resolved to points.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.indices.len()).filter_map(move |i| self.triangle(i))
    }
}
