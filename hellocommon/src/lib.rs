pub mod error;
pub mod greeting;
pub mod print;

pub use error::Error;

/// Common imports for embedding the greeting helpers
///
/// ```
/// use hellocommon::prelude::*;
///
/// assert_eq!(greet(Some("AI")), "Hello, AI!");
/// assert_eq!(add(-1, 1), 0);
/// assert!(checked_add(i64::MAX, 1).is_err());
/// ```
pub mod prelude {
    pub use crate::greeting::{add, checked_add, greet, DEFAULT_NAME};
    pub use crate::{errorln, hintln, verboseln};
    pub use error_stack::{report, Report, Result, ResultExt};
}
