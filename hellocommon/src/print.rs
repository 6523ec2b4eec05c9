//! Printing system
//!
//! Everything here writes to stderr. Stdout is reserved for the
//! program output itself.
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static COLOR: AtomicBool = AtomicBool::new(true);

/// Enable verbose printing
pub fn verbose_on() {
    VERBOSE.store(true, Ordering::Relaxed);
}

/// Disable colored printing
pub fn color_off() {
    COLOR.store(false, Ordering::Relaxed);
}

/// Automatically enable colored printing if stderr is a terminal
pub fn auto_color() {
    if !std::io::stderr().is_terminal() {
        color_off();
    }
}

/// Check if colored printing is enabled
#[inline]
pub fn is_colored() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// Check if verbose printing is enabled
#[inline]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub mod __priv {
    use std::fmt::Arguments;
    use std::io::Write;

    pub static RED: &str = "\x1b[1;31m";
    pub static YELLOW: &str = "\x1b[1;33m";
    pub static MAGENTA: &str = "\x1b[1;35m";
    pub static RESET: &str = "\x1b[0m";

    /// Format the status tag, right-aligned to 12 columns
    pub fn format_tag(color: &str, status: &str, colored: bool) -> String {
        if colored {
            format!("{}{:>12}{} ", color, status, RESET)
        } else {
            format!("{:>12} ", status)
        }
    }

    /// Write one status line to stderr. Write errors are ignored
    pub fn status_line(color: &str, status: &str, args: Arguments<'_>) {
        let tag = format_tag(color, status, super::is_colored());
        let mut s = std::io::stderr().lock();
        let _ = write!(&mut s, "{}", tag);
        let _ = writeln!(&mut s, "{}", args);
    }
}

/// Log a status line using error color
#[macro_export]
macro_rules! errorln {
    ($status:expr, $($args:tt)*) => {
        $crate::print::__priv::status_line(
            $crate::print::__priv::RED,
            $status,
            format_args!($($args)*),
        )
    };
}

/// Log a status line using hint color
#[macro_export]
macro_rules! hintln {
    ($status:expr, $($args:tt)*) => {
        $crate::print::__priv::status_line(
            $crate::print::__priv::YELLOW,
            $status,
            format_args!($($args)*),
        )
    };
}

/// Log a line using verbose color, if verbose is enabled
#[macro_export]
macro_rules! verboseln {
    ($($args:tt)*) => {
        if $crate::print::is_verbose() {
            $crate::print::__priv::status_line(
                $crate::print::__priv::MAGENTA,
                "VERBOSE",
                format_args!($($args)*),
            )
        }
    };
}
