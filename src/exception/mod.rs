//! Failure values carrying a reason code, its label and the raising function.

mod macros;
pub mod origin;
mod value;

pub use value::{Exception, UNSET_CODE};
