//! `vending-logging`: the logging capability injected into vending machines.
//!
//! A machine never writes output itself. It renders one line per catalogue
//! outcome and hands it to every registered [`Logger`] sink.

pub mod level;
pub mod logger;
pub mod registry;
pub mod sinks;

pub use level::LogLevel;
pub use logger::Logger;
pub use registry::LoggerRegistry;
pub use sinks::{ConsoleLogger, LogRecord, MemoryLogger, TimestampedLogger, TracingLogger};
