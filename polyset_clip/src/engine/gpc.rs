use super::ClipEngine;
use crate::{
    error::EngineFault,
    native::{gpc_op, gpc_polygon, gpc_tristrip},
    ClipOperation,
};

#[link(name = "gpc")]
extern "C" {
    fn gpc_polygon_clip(
        set_operation: gpc_op,
        subject_polygon: *mut gpc_polygon,
        clip_polygon: *mut gpc_polygon,
        result_polygon: *mut gpc_polygon,
    );

    fn gpc_tristrip_clip(
        set_operation: gpc_op,
        subject_polygon: *mut gpc_polygon,
        clip_polygon: *mut gpc_polygon,
        result_tristrip: *mut gpc_tristrip,
    );

    fn gpc_polygon_to_tristrip(polygon: *mut gpc_polygon, tristrip: *mut gpc_tristrip);

    fn gpc_free_polygon(polygon: *mut gpc_polygon);

    fn gpc_free_tristrip(tristrip: *mut gpc_tristrip);
}

/// [ClipEngine] backed by the native General Polygon Clipper library (libgpc).
///
/// GPC reads its input polygons without modifying them, the `*mut` casts below only satisfy its C
/// signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct GpcEngine;

unsafe impl ClipEngine for GpcEngine {
    unsafe fn polygon_clip(
        &self,
        op: ClipOperation,
        subject: &gpc_polygon,
        clip: &gpc_polygon,
    ) -> Result<gpc_polygon, EngineFault> {
        let mut result = gpc_polygon::empty();
        gpc_polygon_clip(
            op.into(),
            subject as *const _ as *mut _,
            clip as *const _ as *mut _,
            &mut result,
        );
        Ok(result)
    }

    unsafe fn tristrip_clip(
        &self,
        op: ClipOperation,
        subject: &gpc_polygon,
        clip: &gpc_polygon,
    ) -> Result<gpc_tristrip, EngineFault> {
        let mut result = gpc_tristrip::empty();
        gpc_tristrip_clip(
            op.into(),
            subject as *const _ as *mut _,
            clip as *const _ as *mut _,
            &mut result,
        );
        Ok(result)
    }

    unsafe fn polygon_to_tristrip(
        &self,
        polygon: &gpc_polygon,
    ) -> Result<gpc_tristrip, EngineFault> {
        let mut result = gpc_tristrip::empty();
        gpc_polygon_to_tristrip(polygon as *const _ as *mut _, &mut result);
        Ok(result)
    }

    unsafe fn free_polygon(&self, polygon: &mut gpc_polygon) {
        gpc_free_polygon(polygon);
    }

    unsafe fn free_tristrip(&self, tristrip: &mut gpc_tristrip) {
        gpc_free_tristrip(tristrip);
    }
}
