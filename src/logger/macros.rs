//! `format!`-style entry points. Each takes the logger, an optional `notify` or
//! `attach = <bytes>` marker, then a format string and arguments:
//!
//! ```
//! use hooklog::{Logger, log_error, log_info, log_panic};
//!
//! let logger = Logger::builder().colors(false).build();
//! let disk = "/dev/sda1";
//!
//! log_info!(logger, "mounted {disk}");
//! log_error!(logger, notify, "{disk} is {}% full", 97);
//! log_panic!(logger, attach = b"dmesg tail".to_vec(), "{disk} went read-only");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($logger:expr, $severity:expr, notify, $($arg:tt)+) => {{
        let severity = $severity;
        $logger.emit_and_notify(severity, ::std::format_args!($($arg)+), severity.pings())
    }};
    ($logger:expr, $severity:expr, attach = $attachment:expr, $($arg:tt)+) => {{
        let severity = $severity;
        $logger.emit_with_attachment(
            severity,
            ::std::format_args!($($arg)+),
            $attachment,
            severity.pings(),
        )
    }};
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.emit($severity, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Warning, $($rest)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Error, $($rest)+)
    };
}

/// Notifying forms always mention the configured ping ID.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Panic, $($rest)+)
    };
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Success, $($rest)+)
    };
}
