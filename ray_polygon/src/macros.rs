/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                #[allow(unused_imports)]
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                #[allow(unused_imports)]
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing polygon macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a polygon with the vertexes given as a list of (x, y) tuples, keys are assigned by
/// position (0, 1, 2, ...).
///
/// # Examples
///
/// ```
/// # use ray_polygon::polygon;
/// # use ray_polygon::polygon::*;
/// let triangle = polygon![(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
/// assert_eq!(triangle.vertex_count(), 3);
/// assert_eq!(triangle.points_keys(), &[0, 1, 2]);
/// assert_eq!(triangle[2], Point::new(2, 5.0, 10.0));
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                {
                    let key = points.len() as u64;
                    points.push($crate::polygon::Point::new(key, $x.0, $x.1));
                }
            )*
            $crate::polygon::Polygon::new(points)
        }
    };
}

/// Construct a polygon with the vertexes given as a list of (key, x, y) tuples.
///
/// # Examples
///
/// ```
/// # use ray_polygon::polygon_keyed;
/// # use ray_polygon::polygon::*;
/// let triangle = polygon_keyed![(7, 0.0, 0.0), (3, 10.0, 0.0), (12, 5.0, 10.0)];
/// assert_eq!(triangle.points_keys(), &[7, 3, 12]);
/// ```
#[macro_export]
macro_rules! polygon_keyed {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                points.push($crate::polygon::Point::new($x.0, $x.1, $x.2));
            )*
            $crate::polygon::Polygon::new(points)
        }
    };
}
