use super::{
    allocator::{alloc_array, release_array},
    gpc_polygon, gpc_vertex, gpc_vertex_list, BufferAllocator, PolygonReader, SystemAllocator,
};
use crate::{
    core::math::Vector2,
    error::{EngineFault, MarshalError},
    PolygonSet,
};
use std::mem::ManuallyDrop;
use std::os::raw::c_int;
use std::ptr;

/// Marshaled [PolygonSet] in the engine's nested array layout, owning every array it references.
///
/// Layout: a [gpc_polygon] header referencing one hole flag array and one contour descriptor
/// array, each descriptor referencing its own vertex array. Dropping the buffer releases the hole
/// flags, then each vertex array, then the descriptor array.
pub struct NativePolygon<A: BufferAllocator = SystemAllocator> {
    raw: gpc_polygon,
    /// Length of the hole and descriptor arrays.
    len: usize,
    /// Number of leading descriptors written (their vertex arrays are owned).
    populated: usize,
    allocator: A,
}

impl NativePolygon<SystemAllocator> {
    /// Marshal `set` using the global allocator.
    pub fn new(set: &PolygonSet) -> Result<Self, MarshalError> {
        Self::marshal(set, SystemAllocator)
    }
}

impl<A> NativePolygon<A>
where
    A: BufferAllocator,
{
    /// Marshal `set` into freshly allocated native arrays, in index order with no reordering or
    /// coordinate changes.
    ///
    /// The set is validated before anything is allocated. If an allocation fails part way, every
    /// array already allocated by this call is released before the error is returned.
    pub fn marshal(set: &PolygonSet, allocator: A) -> Result<Self, MarshalError> {
        set.validate()?;
        let len = set.len();
        let num_contours = native_count::<gpc_vertex_list>(len)?;
        for c in &set.contours {
            native_count::<gpc_vertex>(c.len())?;
        }

        let mut buffer = NativePolygon {
            raw: gpc_polygon::empty(),
            len,
            populated: 0,
            allocator,
        };

        buffer.raw.hole = alloc_array::<c_int, _>(&buffer.allocator, len)?;
        buffer.raw.contour = alloc_array::<gpc_vertex_list, _>(&buffer.allocator, len)?;

        for (i, (contour, is_hole)) in set.iter().enumerate() {
            let list = alloc_vertex_list(&buffer.allocator, &contour.vertex_data)?;
            // SAFETY: both arrays were allocated with `len` elements and i < len
            unsafe {
                buffer.raw.hole.add(i).write(is_hole as c_int);
                buffer.raw.contour.add(i).write(list);
            }
            buffer.populated += 1;
        }

        buffer.raw.num_contours = num_contours;
        log::trace!(
            "marshaled polygon set: {} contours, {} vertexes",
            len,
            set.vertex_count()
        );
        Ok(buffer)
    }

    /// Take ownership of a header whose arrays were allocated by `allocator` in the layout
    /// [NativePolygon::marshal] produces (e.g. from [NativePolygon::into_raw]).
    ///
    /// # Safety
    ///
    /// All arrays of `raw` must have been allocated by `allocator` with exactly the declared
    /// lengths and must not be owned by anything else.
    pub unsafe fn from_raw(raw: gpc_polygon, allocator: A) -> Self {
        let len = usize::try_from(raw.num_contours).unwrap_or(0);
        NativePolygon {
            raw,
            len,
            populated: len,
            allocator,
        }
    }

    /// Give up ownership of the arrays, returning the header.
    ///
    /// The caller becomes responsible for releasing them, e.g. through [NativePolygon::from_raw].
    pub fn into_raw(self) -> gpc_polygon {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used again, the allocator is dropped exactly once here
        unsafe { ptr::drop_in_place(&mut this.allocator) };
        this.raw
    }

    /// Native header, valid while `self` is alive.
    #[inline]
    pub fn as_raw(&self) -> &gpc_polygon {
        &self.raw
    }

    /// Number of contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Read the buffer back into a managed [PolygonSet] without modifying it.
    pub fn unmarshal(&self) -> Result<PolygonSet, EngineFault> {
        // SAFETY: the arrays are owned by self and match the declared counts
        let reader = unsafe { PolygonReader::new(&self.raw)? };
        Ok(reader.to_polygon_set())
    }

    /// Release all arrays now. Same as dropping the buffer.
    #[inline]
    pub fn release(self) {
        drop(self)
    }
}

impl<A> Drop for NativePolygon<A>
where
    A: BufferAllocator,
{
    fn drop(&mut self) {
        // SAFETY: arrays were allocated by self.allocator with self.len elements, only the first
        // self.populated descriptors were written
        unsafe {
            release_array(&self.allocator, self.raw.hole, self.len);
            for i in 0..self.populated {
                release_vertex_list(&self.allocator, self.raw.contour.add(i).read());
            }
            release_array(&self.allocator, self.raw.contour, self.len);
        }
        log::trace!("released polygon buffer of {} contours", self.len);
        self.raw = gpc_polygon::empty();
        self.len = 0;
        self.populated = 0;
    }
}

impl<A> std::fmt::Debug for NativePolygon<A>
where
    A: BufferAllocator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativePolygon")
            .field("raw", &self.raw)
            .field("len", &self.len)
            .finish()
    }
}

/// Convert the length of an array of `T` to the native count type.
pub(crate) fn native_count<T>(count: usize) -> Result<c_int, MarshalError> {
    c_int::try_from(count).map_err(|_| MarshalError::CountOverflow {
        count,
        element_size: std::mem::size_of::<T>(),
    })
}

/// Allocate and fill a vertex array descriptor for `points`.
pub(crate) fn alloc_vertex_list<A>(
    allocator: &A,
    points: &[Vector2],
) -> Result<gpc_vertex_list, MarshalError>
where
    A: BufferAllocator + ?Sized,
{
    let num_vertices = native_count::<gpc_vertex>(points.len())?;
    let vertex = alloc_array::<gpc_vertex, _>(allocator, points.len())?;
    for (j, p) in points.iter().enumerate() {
        // SAFETY: array allocated with points.len() elements
        unsafe { vertex.add(j).write(gpc_vertex { x: p.x, y: p.y }) };
    }

    Ok(gpc_vertex_list {
        num_vertices,
        vertex,
    })
}

/// Release the vertex array of a descriptor from [alloc_vertex_list].
///
/// # Safety
///
/// `list` must come from [alloc_vertex_list] on `allocator` and not be released already.
pub(crate) unsafe fn release_vertex_list<A>(allocator: &A, list: gpc_vertex_list)
where
    A: BufferAllocator + ?Sized,
{
    let len = usize::try_from(list.num_vertices).unwrap_or(0);
    release_array(allocator, list.vertex, len);
}
