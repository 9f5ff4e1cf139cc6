/// Assert two [crate::core::traits::FuzzyEq] values (scalars or points) are within epsilon of
/// each other. Without an explicit epsilon the type's default is used.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        use $crate::core::traits::FuzzyEq;
        let (left, right) = ($left, $right);
        assert!(
            left.fuzzy_eq(right),
            "values are not fuzzy equal\n  left: {:?}\n right: {:?}",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        use $crate::core::traits::FuzzyEq;
        let (left, right, eps) = ($left, $right, $eps);
        assert!(
            left.fuzzy_eq_eps(right, eps),
            "values differ by more than {:e}\n  left: {:?}\n right: {:?}",
            eps,
            left,
            right
        );
    }};
}

/// Construct a contour with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polyset_clip::contour;
/// # use polyset_clip::core::math::Vector2;
/// let square = contour![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// assert_eq!(square.len(), 4);
/// assert_eq!(square[2], Vector2::new(4.0, 4.0));
/// ```
#[macro_export]
macro_rules! contour {
    ($( $x:expr ),* $(,)?) => {
        {
            let mut c = $crate::Contour::new();
            $(
                c.add($x.0, $x.1);
            )*
            c
        }
    };
}
