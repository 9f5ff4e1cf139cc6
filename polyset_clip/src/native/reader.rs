use super::{gpc_polygon, gpc_tristrip, gpc_vertex, gpc_vertex_list};
use crate::{core::math::Vector2, error::EngineFault, Contour, PolygonSet, Tristrip};
use std::os::raw::c_int;
use std::slice;

/// Bounds checked view over a native polygon buffer.
///
/// All counts and array pointers are validated once in [PolygonReader::new]; afterwards every
/// array is accessed as a slice of its declared length.
#[derive(Debug, Clone)]
pub struct PolygonReader<'a> {
    holes: &'a [c_int],
    contours: Vec<&'a [gpc_vertex]>,
}

impl<'a> PolygonReader<'a> {
    /// Validate `raw` and build the view.
    ///
    /// Fails on negative counts or null arrays with a non-zero count.
    ///
    /// # Safety
    ///
    /// Every non-null array referenced by `raw` must hold at least its declared number of
    /// initialized elements and stay alive and unmodified for `'a`.
    pub unsafe fn new(raw: &'a gpc_polygon) -> Result<Self, EngineFault> {
        let count = checked_count("contour", raw.num_contours)?;
        let holes = checked_slice("hole", raw.hole, count)?;
        let descriptors = checked_slice("contour", raw.contour, count)?;
        let mut contours = Vec::with_capacity(count);
        for d in descriptors {
            contours.push(vertex_slice(d)?);
        }

        Ok(PolygonReader { holes, contours })
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

    /// Hole flag of contour `index`, `None` if out of range.
    #[inline]
    pub fn is_hole(&self, index: usize) -> Option<bool> {
        self.holes.get(index).map(|&h| h != 0)
    }

    /// Vertexes of contour `index`, `None` if out of range.
    #[inline]
    pub fn contour(&self, index: usize) -> Option<&'a [gpc_vertex]> {
        self.contours.get(index).copied()
    }

    /// Copy the buffer into a freshly owned [PolygonSet].
    pub fn to_polygon_set(&self) -> PolygonSet {
        PolygonSet {
            contours: self.contours.iter().map(|vs| to_contour(vs)).collect(),
            holes: self.holes.iter().map(|&h| h != 0).collect(),
        }
    }
}

/// Bounds checked view over a native triangle strip buffer.
#[derive(Debug, Clone)]
pub struct TristripReader<'a> {
    strips: Vec<&'a [gpc_vertex]>,
}

impl<'a> TristripReader<'a> {
    /// Validate `raw` and build the view.
    ///
    /// # Safety
    ///
    /// Same requirements as [PolygonReader::new].
    pub unsafe fn new(raw: &'a gpc_tristrip) -> Result<Self, EngineFault> {
        let count = checked_count("strip", raw.num_strips)?;
        let descriptors = checked_slice("strip", raw.strip, count)?;
        let mut strips = Vec::with_capacity(count);
        for d in descriptors {
            strips.push(vertex_slice(d)?);
        }

        Ok(TristripReader { strips })
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

    /// Vertexes of strip `index`, `None` if out of range.
    #[inline]
    pub fn strip(&self, index: usize) -> Option<&'a [gpc_vertex]> {
        self.strips.get(index).copied()
    }

    /// Copy the buffer into a freshly owned [Tristrip].
    pub fn to_tristrip(&self) -> Tristrip {
        Tristrip {
            strips: self.strips.iter().map(|vs| to_points(vs)).collect(),
        }
    }
}

/// Read a native polygon buffer into a [PolygonSet]. The buffer is neither modified nor released.
///
/// # Safety
///
/// See [PolygonReader::new].
pub unsafe fn unmarshal_polygon(raw: &gpc_polygon) -> Result<PolygonSet, EngineFault> {
    Ok(PolygonReader::new(raw)?.to_polygon_set())
}

/// Read a native strip buffer into a [Tristrip]. The buffer is neither modified nor released.
///
/// # Safety
///
/// See [PolygonReader::new].
pub unsafe fn unmarshal_tristrip(raw: &gpc_tristrip) -> Result<Tristrip, EngineFault> {
    Ok(TristripReader::new(raw)?.to_tristrip())
}

fn checked_count(field: &'static str, count: c_int) -> Result<usize, EngineFault> {
    usize::try_from(count).map_err(|_| EngineFault::NegativeCount { field, count })
}

unsafe fn checked_slice<'a, T>(
    field: &'static str,
    array: *const T,
    count: usize,
) -> Result<&'a [T], EngineFault> {
    if count == 0 {
        return Ok(&[]);
    }

    if array.is_null() {
        return Err(EngineFault::NullArray { field, count });
    }

    Ok(slice::from_raw_parts(array, count))
}

unsafe fn vertex_slice<'a>(list: &gpc_vertex_list) -> Result<&'a [gpc_vertex], EngineFault> {
    let count = checked_count("vertex", list.num_vertices)?;
    checked_slice("vertex", list.vertex, count)
}

fn to_points(vertexes: &[gpc_vertex]) -> Vec<Vector2> {
    vertexes.iter().map(|v| Vector2::new(v.x, v.y)).collect()
}

fn to_contour(vertexes: &[gpc_vertex]) -> Contour {
    Contour {
        vertex_data: to_points(vertexes),
    }
}
