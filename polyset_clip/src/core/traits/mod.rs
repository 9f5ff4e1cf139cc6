//! Core/common traits for use in polyset_clip.
mod fuzzy_eq;

pub use fuzzy_eq::FuzzyEq;
