//! Logging shims over the `log` facade.
//!
//! With the `logging` feature off the macros expand to nothing observable,
//! but their arguments still type-check.

macro_rules! log_at {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            ::log::$level!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            if false {
                let _ = ::std::format!($($arg)+);
            }
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)+) => { log_at!(trace, $($arg)+) };
}

macro_rules! debug {
    ($($arg:tt)+) => { log_at!(debug, $($arg)+) };
}

macro_rules! info {
    ($($arg:tt)+) => { log_at!(info, $($arg)+) };
}
