use super::{
    allocator::{alloc_array, release_array},
    gpc_tristrip, gpc_vertex, gpc_vertex_list,
    polygon_buffer::{alloc_vertex_list, native_count, release_vertex_list},
    BufferAllocator, SystemAllocator, TristripReader,
};
use crate::{
    error::{EngineFault, MarshalError},
    Tristrip,
};
use std::mem::ManuallyDrop;
use std::ptr;

/// Marshaled [Tristrip] owning its strip descriptor array and every strip's vertex array.
///
/// Mirrors [super::NativePolygon] without the hole flag array. Mostly useful to engine
/// implementations that build strip results in Rust.
pub struct NativeTristrip<A: BufferAllocator = SystemAllocator> {
    raw: gpc_tristrip,
    len: usize,
    populated: usize,
    allocator: A,
}

impl NativeTristrip<SystemAllocator> {
    /// Marshal `tristrip` using the global allocator.
    pub fn new(tristrip: &Tristrip) -> Result<Self, MarshalError> {
        Self::marshal(tristrip, SystemAllocator)
    }
}

impl<A> NativeTristrip<A>
where
    A: BufferAllocator,
{
    /// Marshal `tristrip` in strip order. Arrays allocated before a failing allocation are
    /// released before the error is returned.
    pub fn marshal(tristrip: &Tristrip, allocator: A) -> Result<Self, MarshalError> {
        let len = tristrip.len();
        let num_strips = native_count::<gpc_vertex_list>(len)?;
        for s in &tristrip.strips {
            native_count::<gpc_vertex>(s.len())?;
        }

        let mut buffer = NativeTristrip {
            raw: gpc_tristrip::empty(),
            len,
            populated: 0,
            allocator,
        };

        buffer.raw.strip = alloc_array::<gpc_vertex_list, _>(&buffer.allocator, len)?;
        for (i, strip) in tristrip.strips.iter().enumerate() {
            let list = alloc_vertex_list(&buffer.allocator, strip)?;
            // SAFETY: descriptor array allocated with len elements and i < len
            unsafe { buffer.raw.strip.add(i).write(list) };
            buffer.populated += 1;
        }

        buffer.raw.num_strips = num_strips;
        Ok(buffer)
    }

    /// Take ownership of a header whose arrays were allocated by `allocator`.
    ///
    /// # Safety
    ///
    /// All arrays of `raw` must have been allocated by `allocator` with exactly the declared
    /// lengths and must not be owned by anything else.
    pub unsafe fn from_raw(raw: gpc_tristrip, allocator: A) -> Self {
        let len = usize::try_from(raw.num_strips).unwrap_or(0);
        NativeTristrip {
            raw,
            len,
            populated: len,
            allocator,
        }
    }

    /// Give up ownership of the arrays, returning the header.
    pub fn into_raw(self) -> gpc_tristrip {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used again, the allocator is dropped exactly once here
        unsafe { ptr::drop_in_place(&mut this.allocator) };
        this.raw
    }

    #[inline]
    pub fn as_raw(&self) -> &gpc_tristrip {
        &self.raw
    }

    /// Number of strips.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the buffer back into a managed [Tristrip] without modifying it.
    pub fn unmarshal(&self) -> Result<Tristrip, EngineFault> {
        // SAFETY: the arrays are owned by self and match the declared counts
        let reader = unsafe { TristripReader::new(&self.raw)? };
        Ok(reader.to_tristrip())
    }

    /// Release all arrays now. Same as dropping the buffer.
    #[inline]
    pub fn release(self) {
        drop(self)
    }
}

impl<A> Drop for NativeTristrip<A>
where
    A: BufferAllocator,
{
    fn drop(&mut self) {
        // SAFETY: only the first self.populated descriptors were written
        unsafe {
            for i in 0..self.populated {
                release_vertex_list(&self.allocator, self.raw.strip.add(i).read());
            }
            release_array(&self.allocator, self.raw.strip, self.len);
        }
        self.raw = gpc_tristrip::empty();
        self.len = 0;
        self.populated = 0;
    }
}

impl<A> std::fmt::Debug for NativeTristrip<A>
where
    A: BufferAllocator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeTristrip")
            .field("raw", &self.raw)
            .field("len", &self.len)
            .finish()
    }
}
