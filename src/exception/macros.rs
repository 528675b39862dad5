/// Path of the enclosing function, as a static string.
///
/// ```
/// fn parse() -> &'static str {
///     enumstr::function_name!()
/// }
///
/// assert!(parse().ends_with("::parse"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __origin_marker() {}
        $crate::exception::origin::enclosing_function(::core::any::type_name_of_val(
            &__origin_marker,
        ))
    }};
}

/// Builds an [`Exception`](crate::Exception) for a reason, recording the
/// enclosing function as its origin.
#[macro_export]
macro_rules! exp {
    ($reason:expr) => {
        $crate::Exception::raise($reason, $crate::function_name!())
    };
}

/// Returns early with an [`Exception`](crate::Exception) for a reason,
/// converted into the function's error type.
///
/// ```
/// use enumstr::{Exception, enum_str, throw};
///
/// enum_str! {
///     enum Reason { Empty, TooLong }
/// }
///
/// fn check(input: &str) -> Result<usize, Exception> {
///     if input.is_empty() {
///         throw!(Reason::Empty);
///     }
///     Ok(input.len())
/// }
///
/// assert!(check("").unwrap_err().is(Reason::Empty));
/// ```
#[macro_export]
macro_rules! throw {
    ($reason:expr) => {
        return ::core::result::Result::Err($crate::exp!($reason).into())
    };
}
