//! Contract of the external clip engine that performs the actual boundary clipping and strip
//! decomposition, and guards that release engine-owned result buffers.
#[cfg(feature = "gpc")]
mod gpc;

#[cfg(feature = "gpc")]
pub use gpc::GpcEngine;

use crate::{
    error::EngineFault,
    native::{gpc_polygon, gpc_tristrip, PolygonReader, TristripReader},
    ClipOperation, PolygonSet, Tristrip,
};

/// External polygon clipper working on native buffers.
///
/// Results are returned as native headers owned by the caller; they are released by handing them
/// back to [ClipEngine::free_polygon] / [ClipEngine::free_tristrip] exactly once. On failure no
/// result buffer is produced.
///
/// Result contours never self intersect. Hole contours are combined under the rule that the part
/// of a hole lying outside every boundary contour counts as filled area. Only
/// [ClipOperation::Difference] depends on operand order.
///
/// # Safety
///
/// Implementations must return headers whose arrays hold at least the declared number of
/// elements (or report an [EngineFault]) and must release them completely in the free functions.
pub unsafe trait ClipEngine {
    /// Apply `op` as `subject OP clip`.
    ///
    /// # Safety
    ///
    /// `subject` and `clip` must be well formed buffers (e.g. from [crate::native::NativePolygon]).
    unsafe fn polygon_clip(
        &self,
        op: ClipOperation,
        subject: &gpc_polygon,
        clip: &gpc_polygon,
    ) -> Result<gpc_polygon, EngineFault>;

    /// Apply `op` and return the result as triangle strips.
    ///
    /// # Safety
    ///
    /// Same as [ClipEngine::polygon_clip].
    unsafe fn tristrip_clip(
        &self,
        op: ClipOperation,
        subject: &gpc_polygon,
        clip: &gpc_polygon,
    ) -> Result<gpc_tristrip, EngineFault>;

    /// Decompose the filled area of `polygon` into strips that tile it without gaps or overlaps.
    ///
    /// # Safety
    ///
    /// `polygon` must be a well formed buffer.
    unsafe fn polygon_to_tristrip(&self, polygon: &gpc_polygon)
        -> Result<gpc_tristrip, EngineFault>;

    /// Release a polygon returned by this engine.
    ///
    /// # Safety
    ///
    /// `polygon` must come from this engine and not have been freed already.
    unsafe fn free_polygon(&self, polygon: &mut gpc_polygon);

    /// Release a strip set returned by this engine.
    ///
    /// # Safety
    ///
    /// `tristrip` must come from this engine and not have been freed already.
    unsafe fn free_tristrip(&self, tristrip: &mut gpc_tristrip);
}

/// Engine-owned polygon result, released through the engine when dropped.
pub struct EnginePolygon<'e, E: ClipEngine + ?Sized> {
    raw: gpc_polygon,
    engine: &'e E,
}

impl<'e, E> EnginePolygon<'e, E>
where
    E: ClipEngine + ?Sized,
{
    /// Take ownership of a polygon returned by `engine`.
    ///
    /// # Safety
    ///
    /// `raw` must come from `engine` and not be owned by anything else.
    pub unsafe fn new(raw: gpc_polygon, engine: &'e E) -> Self {
        EnginePolygon { raw, engine }
    }

    #[inline]
    pub fn as_raw(&self) -> &gpc_polygon {
        &self.raw
    }

    /// Copy the result into a managed [PolygonSet], failing on structurally invalid buffers.
    pub fn unmarshal(&self) -> Result<PolygonSet, EngineFault> {
        // SAFETY: ClipEngine contract, arrays match the declared counts while self is alive
        let reader = unsafe { PolygonReader::new(&self.raw)? };
        Ok(reader.to_polygon_set())
    }
}

impl<'e, E> Drop for EnginePolygon<'e, E>
where
    E: ClipEngine + ?Sized,
{
    fn drop(&mut self) {
        // SAFETY: owned result of self.engine, freed once
        unsafe { self.engine.free_polygon(&mut self.raw) };
    }
}

/// Engine-owned strip result, released through the engine when dropped.
pub struct EngineTristrip<'e, E: ClipEngine + ?Sized> {
    raw: gpc_tristrip,
    engine: &'e E,
}

impl<'e, E> EngineTristrip<'e, E>
where
    E: ClipEngine + ?Sized,
{
    /// Take ownership of a strip set returned by `engine`.
    ///
    /// # Safety
    ///
    /// `raw` must come from `engine` and not be owned by anything else.
    pub unsafe fn new(raw: gpc_tristrip, engine: &'e E) -> Self {
        EngineTristrip { raw, engine }
    }

    #[inline]
    pub fn as_raw(&self) -> &gpc_tristrip {
        &self.raw
    }

    /// Copy the result into a managed [Tristrip], failing on structurally invalid buffers.
    pub fn unmarshal(&self) -> Result<Tristrip, EngineFault> {
        // SAFETY: ClipEngine contract, arrays match the declared counts while self is alive
        let reader = unsafe { TristripReader::new(&self.raw)? };
        Ok(reader.to_tristrip())
    }
}

impl<'e, E> Drop for EngineTristrip<'e, E>
where
    E: ClipEngine + ?Sized,
{
    fn drop(&mut self) {
        // SAFETY: owned result of self.engine, freed once
        unsafe { self.engine.free_tristrip(&mut self.raw) };
    }
}
