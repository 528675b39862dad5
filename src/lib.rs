//! Enumerations with paired string tables, and a small failure value built on them.
//!
//! ```
//! use enumstr::{EnumStr, Exception, enum_str};
//!
//! enum_str! {
//!     pub enum ThrowReason { InvalidInput, IncorrectUsage, WrongType }
//! }
//!
//! let failure = Exception::raise(ThrowReason::WrongType, "parse");
//! assert_eq!(failure.code(), 2);
//! assert_eq!(failure.message(), Some("WrongType"));
//! assert_eq!(ThrowReason::NAMES, &["InvalidInput", "IncorrectUsage", "WrongType"]);
//! ```

pub mod enums;
pub mod exception;
pub mod report;

pub use enums::{EnumStr, lookup, names};
pub use exception::{Exception, UNSET_CODE};
pub use report::{OriginStyle, ReportConfig, ReportFormat, render};
