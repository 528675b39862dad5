//! Origin labels derived from the path of the enclosing function.

/// Name of the marker item declared by [`function_name!`](crate::function_name).
const MARKER: &str = "::__origin_marker";
const CLOSURE: &str = "::{{closure}}";

/// Turns the type name of the marker item into the path of the function that
/// declares it. Closure and async-block segments are dropped.
#[doc(hidden)]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    let mut path = marker_path.strip_suffix(MARKER).unwrap_or(marker_path);
    while let Some(outer) = path.strip_suffix(CLOSURE) {
        path = outer;
    }
    path
}

pub fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
