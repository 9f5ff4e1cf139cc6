//! Set operations (difference, intersection, union, exclusive-or) over 2D polygon sets with holes,
//! self intersections and concavities, carried out by an external clip engine, plus assembly of
//! the engine's triangle strips into triangle lists and indexed meshes.
//!
//! The engine is reached through the [ClipEngine] trait and the native buffer layout in
//! [native]. [Clipper] composes marshaling, the engine call and unmarshaling with every buffer
//! released on all exit paths.
//!
//! With the `gpc` feature enabled, [engine::GpcEngine] binds the native General Polygon Clipper
//! library.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;
mod clipper;
pub mod core;
pub mod engine;
pub mod error;
pub mod native;
pub mod polygon_set;
pub mod tristrip;

pub use static_aabb2d_index::AABB;

pub use crate::clipper::*;
pub use crate::engine::ClipEngine;
pub use crate::error::{ClipError, ClipResult, EngineFault, MarshalError, Operand};
pub use crate::polygon_set::*;
pub use crate::tristrip::{to_indexed_mesh, to_triangle_list, IndexedMesh, Triangle, Tristrip};
