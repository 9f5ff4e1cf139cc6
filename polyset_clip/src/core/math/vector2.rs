use crate::core::traits::FuzzyEq;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two dimensional double precision point/vector.
///
/// `PartialEq` is plain floating point equality. Use [Vector2::bit_key] when points must be
/// identified exactly (e.g. as hash map keys).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(0.0, 0.0)
    }

    /// Scale each component independently.
    #[inline]
    pub fn scale_xy(&self, sx: f64, sy: f64) -> Self {
        vec2(sx * self.x, sy * self.y)
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Exact identity of the point: the raw bit patterns of x and y.
    ///
    /// Two points share a key iff both coordinates are bit for bit equal, so `0.0` and `-0.0`
    /// are distinct and no tolerance is applied.
    #[inline]
    pub fn bit_key(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl FuzzyEq for Vector2 {
    #[inline]
    fn fuzzy_epsilon() -> f64 {
        <f64 as FuzzyEq>::fuzzy_epsilon()
    }

    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: f64) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

#[inline(always)]
pub fn vec2(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl ops::$op_trait<Vector2> for Vector2 {
            type Output = Vector2;
            fn $op_func(self, rhs: Vector2) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl ops::$op_trait<&Vector2> for &Vector2 {
            type Output = Vector2;
            fn $op_func(self, rhs: &Vector2) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);
