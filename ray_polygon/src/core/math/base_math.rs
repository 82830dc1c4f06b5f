/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use ray_polygon::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Returns true if `value` lies in the closed range spanned by `a` and `b` (in either order).
#[inline]
pub fn between_inclusive<T>(value: T, a: T, b: T) -> bool
where
    T: PartialOrd + Copy,
{
    let (min_val, max_val) = min_max(a, b);
    value >= min_val && value <= max_val
}
