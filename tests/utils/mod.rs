//! Utilities.
#![allow(dead_code)]

/// Asserts that the two values display the same string.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        assert_eq!($left.to_string(), $right.to_string());
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        assert_eq!($left.to_string(), $right.to_string(), $($args)*);
    }};
}
