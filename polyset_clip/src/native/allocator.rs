use crate::error::MarshalError;
use std::alloc::Layout;
use std::ptr::{self, NonNull};

/// Backend that provides the memory blocks of marshaled buffers.
///
/// Only called with non-zero sized layouts. Every block handed out by
/// [BufferAllocator::allocate] is returned exactly once through [BufferAllocator::release] with
/// the same layout.
///
/// # Safety
///
/// Implementations must return blocks that satisfy `layout` (size and alignment) and stay valid
/// until released.
pub unsafe trait BufferAllocator {
    /// Allocate a block for `layout`, `None` on failure.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Release a block previously returned by [BufferAllocator::allocate].
    ///
    /// # Safety
    ///
    /// `block` must come from `allocate` on this allocator with the same `layout` and must not
    /// have been released already.
    unsafe fn release(&self, block: NonNull<u8>, layout: Layout);
}

/// [BufferAllocator] backed by the global Rust allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

unsafe impl BufferAllocator for SystemAllocator {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() != 0);
        // SAFETY: callers never pass zero sized layouts
        NonNull::new(unsafe { std::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn release(&self, block: NonNull<u8>, layout: Layout) {
        std::alloc::dealloc(block.as_ptr(), layout)
    }
}

unsafe impl<A> BufferAllocator for &A
where
    A: BufferAllocator + ?Sized,
{
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn release(&self, block: NonNull<u8>, layout: Layout) {
        (**self).release(block, layout)
    }
}

/// Allocate an uninitialized array of `len` elements. A zero length array is the null pointer and
/// allocates nothing.
pub(crate) fn alloc_array<T, A>(allocator: &A, len: usize) -> Result<*mut T, MarshalError>
where
    A: BufferAllocator + ?Sized,
{
    if len == 0 || std::mem::size_of::<T>() == 0 {
        return Ok(ptr::null_mut());
    }

    let layout = Layout::array::<T>(len).map_err(|_| MarshalError::CountOverflow {
        count: len,
        element_size: std::mem::size_of::<T>(),
    })?;
    match allocator.allocate(layout) {
        Some(block) => {
            log::trace!("allocated {} bytes for {} elements", layout.size(), len);
            Ok(block.as_ptr().cast())
        }
        None => Err(MarshalError::Allocation {
            bytes: layout.size(),
        }),
    }
}

/// Release an array from [alloc_array]. Null pointers are ignored.
///
/// # Safety
///
/// `array` must be null or come from [alloc_array] on `allocator` with the same `len`, and must
/// not be referenced afterwards.
pub(crate) unsafe fn release_array<T, A>(allocator: &A, array: *mut T, len: usize)
where
    A: BufferAllocator + ?Sized,
{
    let Some(block) = NonNull::new(array) else {
        return;
    };

    // layout was valid when the array was allocated with the same len
    if let Ok(layout) = Layout::array::<T>(len) {
        log::trace!("releasing {} bytes", layout.size());
        allocator.release(block.cast(), layout);
    }
}
