//! Logging macros shared by the workspace.
//!
//! All of them forward to [`tracing`]. The CLI formatter looks at the event
//! target to pick a prefix, so `success!` and raw prints use fixed targets
//! while the rest keep the caller's module path.

pub use tracing;

/// Events rendered verbatim, without a status prefix.
pub const PRINT_TARGET: &str = "pingscript::print";

/// Info events rendered with the success prefix.
pub const SUCCESS_TARGET: &str = "pingscript::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
