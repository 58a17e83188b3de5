//! Utilities for logging messages from the library.

use once_cell::sync::Lazy;

/// Prints a message to stdout if the `SVGPATH_LOG` environment variable is set.
#[macro_export]
macro_rules! svgpath_log {
    (
        $($arg:tt)+
    ) => {
        if $crate::log::log_enabled() {
            println!("{}", format_args!($($arg)+));
        }
    };
}

pub fn log_enabled() -> bool {
    static ENABLED: Lazy<bool> = Lazy::new(|| ::std::env::var_os("SVGPATH_LOG").is_some());

    *ENABLED
}
