//! The logging capability consumed by the catalogue engine.

use crate::level::LogLevel;

/// A logging sink.
///
/// Sinks are injected into a machine and receive one call per catalogue log
/// line. They are shared across threads, hence `Send + Sync`.
///
/// ## Templated messages
///
/// The templated form takes `fmt::Arguments`, so callers build the message with
/// `format_args!` and the sink decides whether and how to render it:
///
/// ```ignore
/// sink.log_args(format_args!("restocked '{}' by {}", item, quantity), LogLevel::Info);
/// ```
pub trait Logger: Send + Sync {
    /// Log a pre-rendered message.
    fn log(&self, message: &str, level: LogLevel);

    /// Render and log a templated message.
    fn log_args(&self, args: core::fmt::Arguments<'_>, level: LogLevel) {
        match args.as_str() {
            Some(message) => self.log(message, level),
            None => self.log(&args.to_string(), level),
        }
    }
}

impl<L> Logger for std::sync::Arc<L>
where
    L: Logger + ?Sized,
{
    fn log(&self, message: &str, level: LogLevel) {
        (**self).log(message, level)
    }

    fn log_args(&self, args: core::fmt::Arguments<'_>, level: LogLevel) {
        (**self).log_args(args, level)
    }
}
