//! Native buffer layout shared with the clip engine, and the marshaling between it and
//! [crate::PolygonSet] / [crate::Tristrip].
//!
//! Every buffer built here is owned by a single value ([NativePolygon], [NativeTristrip]) that
//! releases its arrays leaf to root when dropped, so release runs on every exit path. Buffers
//! produced by the engine are owned by the guards in [crate::engine] and released through the
//! engine's own free routines.
#![allow(non_camel_case_types)]
mod allocator;
mod polygon_buffer;
mod raw;
mod reader;
mod tristrip_buffer;

pub use allocator::*;
pub use polygon_buffer::*;
pub use raw::*;
pub use reader::*;
pub use tristrip_buffer::*;
