//! Logging macros for timeline resolution with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Verbosity levels:
//! - 0: SILENT (only errors)
//! - 1: ASSIGN (timeline assignments)
//! - 2: EVAL (predecessor evaluation details)
//! - 3: TRACE (full resolution internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_ASSIGN: u8 = 1;
pub const VERBOSITY_EVAL: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at ASSIGN level (verbosity >= 1).
///
/// Used for: timeline assignments, kept explicit timelines.
#[macro_export]
macro_rules! log_assign {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_ASSIGN {
            eprintln!($($arg)*);
        }
    };
}

/// Log at EVAL level (verbosity >= 2).
///
/// Used for: predecessor lookups, dangling-reference skips.
#[macro_export]
macro_rules! log_eval {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_EVAL {
            eprintln!($($arg)*);
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
///
/// Used for: parsed predecessor tokens, resolution ordering.
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            eprintln!($($arg)*);
        }
    };
}
