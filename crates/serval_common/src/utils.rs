//! Small helper macros used across the crate.

/// Counts the number of comma-separated expressions passed to it.
///
/// Counting happens at compile time, batches of 10 are peeled off first to
/// keep the recursion depth down for long lists.
#[macro_export]
macro_rules! count_exprs {
    (@unit $_val:expr) => { () };
    ($_a:expr, $_b:expr, $_c:expr, $_d:expr, $_e:expr,
     $_f:expr, $_g:expr, $_h:expr, $_i:expr, $_j:expr,
     $($rest:expr),+ $(,)?) => {
        10usize + $crate::count_exprs!($($rest),+)
    };
    ($($val:expr),* $(,)?) => {
        <[()]>::len(&[$($crate::count_exprs!(@unit $val)),*])
    };
}
