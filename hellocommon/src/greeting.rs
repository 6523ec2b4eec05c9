//! Greeting and arithmetic helpers
//!
//! Both functions are pure. Nothing in here prints.

use std::ops::Add;

use error_stack::{report, Result};

use crate::Error;

/// Name used by [`greet`] when no name is given
pub static DEFAULT_NAME: &str = "world";

/// Format a greeting for `name`
///
/// `None` is replaced with [`DEFAULT_NAME`]. Only an omitted name is
/// defaulted: `Some("")` produces `"Hello, !"`. The name is inserted
/// verbatim, without trimming or escaping.
///
/// ```
/// use hellocommon::greeting::greet;
///
/// assert_eq!(greet(Some("AI")), "Hello, AI!");
/// assert_eq!(greet(None), "Hello, world!");
/// ```
pub fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}

/// Add two numbers using the native addition of `T`
///
/// For integer types, overflow panics in debug builds and wraps
/// in release builds. Floats follow IEEE-754.
/// Use [`checked_add`] to get an error on overflow instead.
#[inline]
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Add two `i64`, reporting overflow as [`Error::Overflow`]
pub fn checked_add(a: i64, b: i64) -> Result<i64, Error> {
    a.checked_add(b).ok_or_else(|| report!(Error::Overflow(a, b)))
}
