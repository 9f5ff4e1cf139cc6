use std::os::raw::c_int;
use std::ptr;

/// Native vertex record.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct gpc_vertex {
    pub x: f64,
    pub y: f64,
}

/// Native vertex array descriptor: a count and a pointer to `num_vertices` [gpc_vertex].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct gpc_vertex_list {
    pub num_vertices: c_int,
    pub vertex: *mut gpc_vertex,
}

impl gpc_vertex_list {
    pub const fn empty() -> Self {
        gpc_vertex_list {
            num_vertices: 0,
            vertex: ptr::null_mut(),
        }
    }
}

/// Native polygon set header.
///
/// `hole` points to `num_contours` flags (non-zero = hole) and `contour` to `num_contours`
/// [gpc_vertex_list] descriptors, each referencing its own vertex array.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct gpc_polygon {
    pub num_contours: c_int,
    pub hole: *mut c_int,
    pub contour: *mut gpc_vertex_list,
}

impl gpc_polygon {
    /// Header with zero contours and null arrays.
    pub const fn empty() -> Self {
        gpc_polygon {
            num_contours: 0,
            hole: ptr::null_mut(),
            contour: ptr::null_mut(),
        }
    }
}

impl Default for gpc_polygon {
    fn default() -> Self {
        Self::empty()
    }
}

/// Native triangle strip set header: `num_strips` [gpc_vertex_list] descriptors.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct gpc_tristrip {
    pub num_strips: c_int,
    pub strip: *mut gpc_vertex_list,
}

impl gpc_tristrip {
    /// Header with zero strips and a null array.
    pub const fn empty() -> Self {
        gpc_tristrip {
            num_strips: 0,
            strip: ptr::null_mut(),
        }
    }
}

impl Default for gpc_tristrip {
    fn default() -> Self {
        Self::empty()
    }
}

/// Native set operation tag.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum gpc_op {
    GPC_DIFF = 0,
    GPC_INT = 1,
    GPC_XOR = 2,
    GPC_UNION = 3,
}

impl From<crate::ClipOperation> for gpc_op {
    fn from(op: crate::ClipOperation) -> Self {
        use crate::ClipOperation::*;
        match op {
            Difference => gpc_op::GPC_DIFF,
            Intersection => gpc_op::GPC_INT,
            Xor => gpc_op::GPC_XOR,
            Union => gpc_op::GPC_UNION,
        }
    }
}
