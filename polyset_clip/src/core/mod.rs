//! Core module has shared math and traits used by the polygon set and strip types.
pub mod math;
pub mod traits;
