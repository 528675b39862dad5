//! Enumerations declared from a single identifier list.
//!
//! [`define_enum!`](crate::define_enum) declares the enumeration,
//! [`stringify_enum!`](crate::stringify_enum) attaches its string table, and
//! [`enum_str!`](crate::enum_str) does both at once. Enumerators are numbered
//! 0, 1, 2, ... in the order they are listed, and label `i` of the table is the
//! spelling of enumerator `i`.

mod macros;

use crate::exception::Exception;

/// An enumeration carrying a static label for every enumerator.
///
/// Implemented by [`stringify_enum!`](crate::stringify_enum). `NAMES[i]` is the
/// label of the enumerator whose code is `i`.
pub trait EnumStr: Copy + 'static {
    /// Labels in declaration order.
    const NAMES: &'static [&'static str];

    /// Position of the enumerator in its declaration list.
    fn code(self) -> i32;

    fn name(self) -> &'static str {
        Self::NAMES[self.code() as usize]
    }

    /// Builds a failure for this reason, raised from `origin`.
    fn raise(self, origin: &'static str) -> Exception {
        Exception::raise(self, origin)
    }
}

/// Label of the enumerator of `E` whose code is `index`.
///
/// No bounds checking is promised beyond slice indexing: an out-of-range
/// index panics and never yields the label of another enumerator.
pub fn lookup<E: EnumStr>(index: usize) -> &'static str {
    E::NAMES[index]
}

/// All labels of `E` in declaration order.
pub fn names<E: EnumStr>() -> impl ExactSizeIterator<Item = &'static str> + DoubleEndedIterator {
    E::NAMES.iter().copied()
}
