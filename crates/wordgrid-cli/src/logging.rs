//! Verbose diagnostics on stderr, off unless `--verbose` is given

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Write one diagnostic line to stderr when verbose logging is on
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!("[wordgrid] {}", format!($($arg)*));
        }
    };
}
