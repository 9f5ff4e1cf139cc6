/// Trait for fuzzy equality comparisons with floating point values.
///
/// Only used for geometric queries and test assertions. Vertex deduplication in
/// [crate::tristrip::to_indexed_mesh] never goes through this trait, it compares coordinates
/// bit for bit.
///
/// # Examples
///
/// ```
/// # use polyset_clip::core::traits::*;
/// let a: f64 = 0.1 + 0.2;
/// let b: f64 = 0.3;
///
/// assert_ne!(a, b);
/// assert!(a.fuzzy_eq(b));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> f64;

    /// Returns `true` if this value is approximately equal to `other` using `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: f64) -> bool;

    /// Returns `true` if this value is approximately equal to `other` using
    /// [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

impl FuzzyEq for f64 {
    #[inline]
    fn fuzzy_epsilon() -> f64 {
        1.0e-8
    }

    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: f64) -> bool {
        (*self - other).abs() < fuzzy_epsilon
    }
}
