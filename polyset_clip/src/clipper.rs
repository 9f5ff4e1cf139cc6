use crate::{
    engine::{ClipEngine, EnginePolygon, EngineTristrip},
    error::{ClipError, ClipResult, EngineFault, Operand},
    native::{BufferAllocator, NativePolygon, SystemAllocator},
    tristrip::{to_indexed_mesh, to_triangle_list},
    ClipOperation, Contour, IndexedMesh, PolygonSet, Triangle, Tristrip,
};
use static_aabb2d_index::AABB;
use std::borrow::Cow;

/// Types usable as an operand of the set operations on [Clipper].
///
/// A [Contour] is a one-contour set with no holes, a rectangle is a one-contour set holding its
/// counter clockwise outline.
pub trait AsPolygonSet {
    fn as_polygon_set(&self) -> Cow<'_, PolygonSet>;
}

impl AsPolygonSet for PolygonSet {
    #[inline]
    fn as_polygon_set(&self) -> Cow<'_, PolygonSet> {
        Cow::Borrowed(self)
    }
}

impl AsPolygonSet for Contour {
    fn as_polygon_set(&self) -> Cow<'_, PolygonSet> {
        Cow::Owned(PolygonSet::from_contour(self.clone(), false))
    }
}

impl AsPolygonSet for AABB<f64> {
    fn as_polygon_set(&self) -> Cow<'_, PolygonSet> {
        Cow::Owned(PolygonSet::from(*self))
    }
}

/// Runs set operations and strip decomposition through a [ClipEngine].
///
/// Every call marshals its operands into buffers from `allocator`, invokes the engine, copies the
/// result back into managed values and releases all buffers (inputs and engine result) before
/// returning, on success and on every error path. Calls share no mutable state, so a `Clipper`
/// can be used from several threads if the engine allows it.
#[derive(Debug, Clone, Default)]
pub struct Clipper<E, A = SystemAllocator> {
    engine: E,
    allocator: A,
}

impl<E> Clipper<E, SystemAllocator>
where
    E: ClipEngine,
{
    /// Create a clipper over `engine` using the global allocator for marshaled buffers.
    #[inline]
    pub fn new(engine: E) -> Self {
        Clipper {
            engine,
            allocator: SystemAllocator,
        }
    }
}

impl<E, A> Clipper<E, A>
where
    E: ClipEngine,
    A: BufferAllocator,
{
    /// Create a clipper over `engine` allocating marshaled buffers from `allocator`.
    #[inline]
    pub fn with_allocator(engine: E, allocator: A) -> Self {
        Clipper { engine, allocator }
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Compute `subject OP clip`.
    pub fn clip(
        &self,
        op: ClipOperation,
        subject: &PolygonSet,
        clip: &PolygonSet,
    ) -> ClipResult<PolygonSet> {
        let operation = op.name();
        log::debug!(
            "{}: subject {} contours, clip {} contours",
            operation,
            subject.len(),
            clip.len()
        );

        let (subject_buf, clip_buf) = self.marshal_operands(operation, subject, clip)?;
        // SAFETY: both buffers were built by NativePolygon::marshal
        let raw = unsafe {
            self.engine
                .polygon_clip(op, subject_buf.as_raw(), clip_buf.as_raw())
        }
        .map_err(|fault| engine_error(operation, Operand::Result, fault))?;
        // SAFETY: raw was just returned by self.engine
        let result = unsafe { EnginePolygon::new(raw, &self.engine) };
        let set = result
            .unmarshal()
            .map_err(|fault| engine_error(operation, Operand::Result, fault))?;

        log::debug!("{}: result {} contours", operation, set.len());
        Ok(set)
    }

    /// Compute `subject OP clip` and return the result decomposed into triangle strips.
    pub fn clip_to_tristrip(
        &self,
        op: ClipOperation,
        subject: &PolygonSet,
        clip: &PolygonSet,
    ) -> ClipResult<Tristrip> {
        const OPERATION: &str = "tristrip clip";
        log::debug!(
            "{} ({}): subject {} contours, clip {} contours",
            OPERATION,
            op,
            subject.len(),
            clip.len()
        );

        let (subject_buf, clip_buf) = self.marshal_operands(OPERATION, subject, clip)?;
        // SAFETY: both buffers were built by NativePolygon::marshal
        let raw = unsafe {
            self.engine
                .tristrip_clip(op, subject_buf.as_raw(), clip_buf.as_raw())
        }
        .map_err(|fault| engine_error(OPERATION, Operand::Result, fault))?;
        // SAFETY: raw was just returned by self.engine
        let result = unsafe { EngineTristrip::new(raw, &self.engine) };
        let tristrip = result
            .unmarshal()
            .map_err(|fault| engine_error(OPERATION, Operand::Result, fault))?;

        log::debug!("{}: {} strips", OPERATION, tristrip.len());
        Ok(tristrip)
    }

    /// Decompose the filled area of `polygon` into triangle strips.
    pub fn decompose(&self, polygon: &PolygonSet) -> ClipResult<Tristrip> {
        const OPERATION: &str = "decompose";
        log::debug!("{}: {} contours", OPERATION, polygon.len());

        let buf = NativePolygon::marshal(polygon, &self.allocator)
            .map_err(|e| e.in_context(OPERATION, Operand::Polygon))?;
        // SAFETY: buffer was built by NativePolygon::marshal
        let raw = unsafe { self.engine.polygon_to_tristrip(buf.as_raw()) }
            .map_err(|fault| engine_error(OPERATION, Operand::Result, fault))?;
        // SAFETY: raw was just returned by self.engine
        let result = unsafe { EngineTristrip::new(raw, &self.engine) };
        let tristrip = result
            .unmarshal()
            .map_err(|fault| engine_error(OPERATION, Operand::Result, fault))?;

        log::debug!("{}: {} strips", OPERATION, tristrip.len());
        Ok(tristrip)
    }

    /// Triangle list covering the filled area of `polygon`.
    pub fn triangulate(&self, polygon: &PolygonSet) -> ClipResult<Vec<Triangle>> {
        Ok(to_triangle_list(&self.decompose(polygon)?))
    }

    /// Indexed mesh covering the filled area of `polygon`.
    pub fn triangulate_indexed(&self, polygon: &PolygonSet) -> ClipResult<IndexedMesh> {
        Ok(to_indexed_mesh(&self.decompose(polygon)?))
    }

    /// Intersection of `subject` and `clip`.
    pub fn intersect<S, C>(&self, subject: &S, clip: &C) -> ClipResult<PolygonSet>
    where
        S: AsPolygonSet + ?Sized,
        C: AsPolygonSet + ?Sized,
    {
        self.apply(ClipOperation::Intersection, subject, clip)
    }

    /// Area of `subject` not covered by `clip`.
    pub fn subtract<S, C>(&self, subject: &S, clip: &C) -> ClipResult<PolygonSet>
    where
        S: AsPolygonSet + ?Sized,
        C: AsPolygonSet + ?Sized,
    {
        self.apply(ClipOperation::Difference, subject, clip)
    }

    /// Union of `subject` and `clip`.
    pub fn unite<S, C>(&self, subject: &S, clip: &C) -> ClipResult<PolygonSet>
    where
        S: AsPolygonSet + ?Sized,
        C: AsPolygonSet + ?Sized,
    {
        self.apply(ClipOperation::Union, subject, clip)
    }

    /// Exclusive-or of `subject` and `clip`.
    pub fn xor<S, C>(&self, subject: &S, clip: &C) -> ClipResult<PolygonSet>
    where
        S: AsPolygonSet + ?Sized,
        C: AsPolygonSet + ?Sized,
    {
        self.apply(ClipOperation::Xor, subject, clip)
    }

    fn apply<S, C>(&self, op: ClipOperation, subject: &S, clip: &C) -> ClipResult<PolygonSet>
    where
        S: AsPolygonSet + ?Sized,
        C: AsPolygonSet + ?Sized,
    {
        self.clip(op, &subject.as_polygon_set(), &clip.as_polygon_set())
    }

    /// Validate both operands, then marshal them. Nothing is allocated unless both are well
    /// formed.
    fn marshal_operands(
        &self,
        operation: &'static str,
        subject: &PolygonSet,
        clip: &PolygonSet,
    ) -> ClipResult<(NativePolygon<&A>, NativePolygon<&A>)> {
        subject
            .validate()
            .map_err(|e| e.in_context(operation, Operand::Subject))?;
        clip.validate()
            .map_err(|e| e.in_context(operation, Operand::Clip))?;

        let subject_buf = NativePolygon::marshal(subject, &self.allocator)
            .map_err(|e| e.in_context(operation, Operand::Subject))?;
        let clip_buf = NativePolygon::marshal(clip, &self.allocator)
            .map_err(|e| e.in_context(operation, Operand::Clip))?;

        Ok((subject_buf, clip_buf))
    }
}

fn engine_error(operation: &'static str, operand: Operand, fault: EngineFault) -> ClipError {
    log::warn!("{}: clip engine fault: {}", operation, fault);
    ClipError::Engine {
        operation,
        operand,
        fault,
    }
}
