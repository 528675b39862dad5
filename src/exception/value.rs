use std::fmt;

use serde::Serialize;

use super::origin;
use crate::enums::EnumStr;

/// Code reported by an [`Exception`] that was never set.
pub const UNSET_CODE: i32 = -1;

/// A failure raised for a caller-declared reason.
///
/// Holds the reason's code, its label from the reason enumeration's string
/// table, and the function it was raised from. Every field refers to static
/// data, so the value is `Copy` and can be returned, stored or boxed freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Exception {
    code: i32,
    message: Option<&'static str>,
    origin: Option<&'static str>,
}

impl Exception {
    pub const fn new() -> Self {
        Self {
            code: UNSET_CODE,
            message: None,
            origin: None,
        }
    }

    /// Builds a fresh failure for `reason`, raised from `origin`.
    pub fn raise<R: EnumStr>(reason: R, origin: &'static str) -> Self {
        let exception = *Self::new().set(reason.code(), reason.name(), origin);
        tracing::debug!(
            code = exception.code,
            message = reason.name(),
            origin,
            "raising exception"
        );
        exception
    }

    /// Overwrites all three fields.
    pub fn set(&mut self, code: i32, message: &'static str, origin: &'static str) -> &mut Self {
        self.code = code;
        self.message = Some(message);
        self.origin = Some(origin);
        self
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn origin(&self) -> Option<&'static str> {
        self.origin
    }

    /// Last path segment of the origin, `parse` for `crate::parser::parse`.
    pub fn short_origin(&self) -> Option<&'static str> {
        self.origin.map(origin::last_segment)
    }

    /// The message, or an empty string when unset.
    pub fn what(&self) -> &'static str {
        self.message.unwrap_or("")
    }

    pub fn is_set(&self) -> bool {
        self.message.is_some()
    }

    /// Whether this failure was raised for `reason`.
    pub fn is<R: EnumStr>(&self, reason: R) -> bool {
        self.code == reason.code() && self.message == Some(reason.name())
    }
}

impl Default for Exception {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "unset exception (code {})", self.code),
        }
    }
}

impl std::error::Error for Exception {}
