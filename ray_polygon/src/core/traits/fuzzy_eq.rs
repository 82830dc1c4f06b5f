/// Trait for equality comparisons of floating point values within a tolerance.
///
/// Geometric predicates in this crate compare cross products and coordinates against zero or
/// against each other, and exact equality is rarely meaningful for computed floating point values.
/// Every comparison has an `_eps` form taking the tolerance explicitly and a short form using
/// [FuzzyEq::fuzzy_epsilon].
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert_ne!(a, b);
/// assert!(a.fuzzy_eq(b));
///
/// // a tolerance of 1 treats anything that truncates to integer zero as zero
/// assert!(0.75f64.fuzzy_eq_zero_eps(1.0));
/// assert!(!1.0f64.fuzzy_eq_zero_eps(1.0));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default tolerance used by the non `_eps` comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `|self - other| < fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if `|self| < fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-8);
impl_fuzzy_eq!(f64, 1.0e-8);
