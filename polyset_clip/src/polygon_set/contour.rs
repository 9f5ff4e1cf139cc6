use crate::core::math::Vector2;
use static_aabb2d_index::AABB;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a contour derived from its signed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContourOrientation {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero area (fewer than 3 vertexes or collinear).
    Degenerate,
}

/// Ordered, implicitly closed sequence of points forming one loop of a [crate::PolygonSet].
///
/// No orientation is stored or enforced, see [Contour::orientation].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    /// Contiguous sequence of vertexes, last one connects back to the first.
    pub vertex_data: Vec<Vector2>,
}

impl Contour {
    /// Create a new empty [Contour].
    #[inline]
    pub fn new() -> Self {
        Contour {
            vertex_data: Vec::new(),
        }
    }

    /// Create a new empty [Contour] with space reserved for `capacity` vertexes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Contour {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    /// Create a contour from a sequence of points.
    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Vector2>,
    {
        Contour {
            vertex_data: points.into_iter().map(Into::into).collect(),
        }
    }

    /// Counter clockwise rectangle contour covering `rect`:
    /// `(min_x, min_y), (max_x, min_y), (max_x, max_y), (min_x, max_y)`.
    pub fn from_rect_ccw(rect: &AABB<f64>) -> Self {
        Contour::from_points([
            (rect.min_x, rect.min_y),
            (rect.max_x, rect.min_y),
            (rect.max_x, rect.max_y),
            (rect.min_x, rect.max_y),
        ])
    }

    /// Add a vertex to the end of the contour.
    #[inline]
    pub fn add(&mut self, x: f64, y: f64) {
        self.vertex_data.push(Vector2::new(x, y));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2> {
        self.vertex_data.iter()
    }

    /// Axis aligned bounding box of the vertexes, `None` if the contour has no vertexes.
    pub fn extents(&self) -> Option<AABB<f64>> {
        let (first, rest) = self.vertex_data.split_first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for v in rest {
            result.min_x = result.min_x.min(v.x);
            result.min_y = result.min_y.min(v.y);
            result.max_x = result.max_x.max(v.x);
            result.max_y = result.max_y.max(v.y);
        }

        Some(result)
    }

    /// Signed area using the shoelace formula, positive for counter clockwise contours and
    /// negative for clockwise contours.
    pub fn area(&self) -> f64 {
        let n = self.vertex_data.len();
        if n < 3 {
            return 0.0;
        }

        let mut double_total_area = 0.0;
        let mut prev = self.vertex_data[n - 1];
        for &v in &self.vertex_data {
            double_total_area += prev.perp_dot(v);
            prev = v;
        }

        double_total_area / 2.0
    }

    /// Orientation derived from [Contour::area].
    pub fn orientation(&self) -> ContourOrientation {
        let a = self.area();
        if a > 0.0 {
            ContourOrientation::CounterClockwise
        } else if a < 0.0 {
            ContourOrientation::Clockwise
        } else {
            ContourOrientation::Degenerate
        }
    }

    /// Copy of the contour with x scaled by `sx` and y scaled by `sy`.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        Contour {
            vertex_data: self.vertex_data.iter().map(|v| v.scale_xy(sx, sy)).collect(),
        }
    }
}

impl Index<usize> for Contour {
    type Output = Vector2;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Vector2;
    type IntoIter = std::slice::Iter<'a, Vector2>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertex_data.iter()
    }
}

impl From<Vec<Vector2>> for Contour {
    fn from(vertex_data: Vec<Vector2>) -> Self {
        Contour { vertex_data }
    }
}
