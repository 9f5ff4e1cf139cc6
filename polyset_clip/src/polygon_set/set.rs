use super::Contour;
use crate::error::MarshalError;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Set of contours, each tagged as boundary (`false`) or hole (`true`), defining a filled planar
/// region.
///
/// `contours` and `holes` are paired by index and must have equal length, see
/// [PolygonSet::validate]. Holes are not required to lie inside a boundary: the part of a hole that
/// lies outside every boundary contour is treated as ordinary filled area by the clip engine.
///
/// A set with zero contours is the canonical empty value and a valid operand everywhere.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonSet {
    /// Contours in index order.
    pub contours: Vec<Contour>,
    /// Hole flag for the contour at the same index.
    pub holes: Vec<bool>,
}

impl PolygonSet {
    /// Create a new empty [PolygonSet].
    #[inline]
    pub fn new() -> Self {
        PolygonSet {
            contours: Vec::new(),
            holes: Vec::new(),
        }
    }

    /// Canonical empty polygon set (zero contours).
    #[inline]
    pub fn empty() -> Self {
        Self::new()
    }

    /// Polygon set holding a single contour.
    pub fn from_contour(contour: Contour, is_hole: bool) -> Self {
        PolygonSet {
            contours: vec![contour],
            holes: vec![is_hole],
        }
    }

    /// Append a contour and its hole flag.
    #[inline]
    pub fn push(&mut self, contour: Contour, is_hole: bool) {
        self.contours.push(contour);
        self.holes.push(is_hole);
    }

    /// Number of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Check that every contour has exactly one hole flag.
    pub fn validate(&self) -> Result<(), MarshalError> {
        if self.contours.len() != self.holes.len() {
            return Err(MarshalError::InvariantViolation {
                contours: self.contours.len(),
                holes: self.holes.len(),
            });
        }

        Ok(())
    }

    /// Iterate `(contour, is_hole)` pairs in index order.
    ///
    /// Stops at the shorter of the two sequences if the set is malformed.
    pub fn iter(&self) -> impl Iterator<Item = (&Contour, bool)> + '_ {
        self.contours.iter().zip(self.holes.iter().copied())
    }

    /// Bounding box of all boundary (non-hole) contours.
    ///
    /// Hole contours are skipped entirely, even where a hole extends past its boundary. Returns
    /// `None` for an empty set or a set made only of holes.
    pub fn bounding_box(&self) -> Option<AABB<f64>> {
        self.iter()
            .filter(|(_, is_hole)| !is_hole)
            .filter_map(|(c, _)| c.extents())
            .reduce(|acc, b| {
                AABB::new(
                    acc.min_x.min(b.min_x),
                    acc.min_y.min(b.min_y),
                    acc.max_x.max(b.max_x),
                    acc.max_y.max(b.max_y),
                )
            })
    }

    /// Copy containing only the boundary contours.
    pub fn without_holes(&self) -> Self {
        let contours: Vec<Contour> = self
            .iter()
            .filter(|(_, is_hole)| !is_hole)
            .map(|(c, _)| c.clone())
            .collect();
        let holes = vec![false; contours.len()];
        PolygonSet { contours, holes }
    }

    /// Copy with every vertex scaled by `sx` in x and `sy` in y, hole flags kept.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        PolygonSet {
            contours: self.contours.iter().map(|c| c.scaled(sx, sy)).collect(),
            holes: self.holes.clone(),
        }
    }

    /// Total number of vertexes across all contours.
    pub fn vertex_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }
}

impl From<Contour> for PolygonSet {
    /// A single contour is a one-contour set with no holes.
    fn from(contour: Contour) -> Self {
        PolygonSet::from_contour(contour, false)
    }
}

impl From<AABB<f64>> for PolygonSet {
    /// A rectangle is a one-contour set holding its counter clockwise outline.
    fn from(rect: AABB<f64>) -> Self {
        PolygonSet::from_contour(Contour::from_rect_ccw(&rect), false)
    }
}
