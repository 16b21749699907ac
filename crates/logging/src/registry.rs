//! Registered sinks and synchronous fan-out.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::level::LogLevel;
use crate::logger::Logger;

/// Ordered list of logging sinks.
///
/// - Fan-out is synchronous and follows registration order
/// - A panicking sink is isolated; the remaining sinks still receive the line
/// - The list has its own lock, so registration never races with fan-out
#[derive(Default)]
pub struct LoggerRegistry {
    sinks: Mutex<Vec<Arc<dyn Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, logger: Arc<dyn Logger>) {
        self.sinks().push(logger);
    }

    /// Remove the first registration of `logger` (compared by sink identity,
    /// not by value). Returns whether a sink was removed.
    pub fn remove(&self, logger: &Arc<dyn Logger>) -> bool {
        let mut sinks = self.sinks();
        match sinks.iter().position(|s| same_sink(s, logger)) {
            Some(index) => {
                sinks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.sinks().clear();
    }

    pub fn len(&self) -> usize {
        self.sinks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks().is_empty()
    }

    pub fn log(&self, message: &str, level: LogLevel) {
        // Snapshot first: a sink may register or remove sinks while logging.
        let sinks = self.sinks().clone();

        for (index, sink) in sinks.iter().enumerate() {
            let outcome = catch_unwind(AssertUnwindSafe(|| sink.log(message, level)));
            if outcome.is_err() {
                tracing::error!(
                    sink = index,
                    %level,
                    "logging sink panicked; continuing with remaining sinks"
                );
            }
        }
    }

    /// Render `args` once and fan the result out to every sink.
    pub fn log_args(&self, args: core::fmt::Arguments<'_>, level: LogLevel) {
        if self.is_empty() {
            return;
        }
        match args.as_str() {
            Some(message) => self.log(message, level),
            None => self.log(&args.to_string(), level),
        }
    }

    fn sinks(&self) -> MutexGuard<'_, Vec<Arc<dyn Logger>>> {
        // The list is only ever pushed to, removed from or cleared; a poisoned
        // guard still holds a consistent Vec.
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("sinks", &self.len())
            .finish()
    }
}

fn same_sink(a: &Arc<dyn Logger>, b: &Arc<dyn Logger>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemoryLogger;

    struct PanickingLogger;

    impl Logger for PanickingLogger {
        fn log(&self, _message: &str, _level: LogLevel) {
            panic!("sink failure");
        }
    }

    #[test]
    fn fans_out_in_registration_order() {
        let registry = LoggerRegistry::new();
        let first = Arc::new(MemoryLogger::new());
        let second = Arc::new(MemoryLogger::new());
        registry.add(first.clone());
        registry.add(second.clone());

        registry.log("hello", LogLevel::Info);
        registry.log_args(format_args!("item {}", 7), LogLevel::Warning);

        assert_eq!(first.messages(), vec!["hello", "item 7"]);
        assert_eq!(second.records(), first.records());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_matches_identity_not_value() {
        let registry = LoggerRegistry::new();
        let kept: Arc<dyn Logger> = Arc::new(MemoryLogger::new());
        let removed: Arc<dyn Logger> = Arc::new(MemoryLogger::new());
        registry.add(kept.clone());
        registry.add(removed.clone());

        assert!(registry.remove(&removed));
        assert!(!registry.remove(&removed));
        assert_eq!(registry.len(), 1);

        let stranger: Arc<dyn Logger> = Arc::new(MemoryLogger::new());
        assert!(!registry.remove(&stranger));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_drops_only_first_duplicate() {
        let registry = LoggerRegistry::new();
        let sink: Arc<dyn Logger> = Arc::new(MemoryLogger::new());
        registry.add(sink.clone());
        registry.add(sink.clone());

        assert!(registry.remove(&sink));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_removes_every_sink() {
        let registry = LoggerRegistry::new();
        let sink = Arc::new(MemoryLogger::new());
        registry.add(sink.clone());
        registry.clear();

        registry.log("dropped", LogLevel::Critical);
        assert!(registry.is_empty());
        assert!(sink.records().is_empty());
    }

    #[test]
    fn panicking_sink_does_not_starve_the_others() {
        let registry = LoggerRegistry::new();
        let after = Arc::new(MemoryLogger::new());
        registry.add(Arc::new(PanickingLogger));
        registry.add(after.clone());

        registry.log("still delivered", LogLevel::Warning);
        registry.log("again", LogLevel::Info);

        assert_eq!(after.messages(), vec!["still delivered", "again"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn sink_may_register_sinks_while_logging() {
        struct Registering {
            registry: Arc<LoggerRegistry>,
            late: Arc<MemoryLogger>,
        }

        impl Logger for Registering {
            fn log(&self, _message: &str, _level: LogLevel) {
                self.registry.add(self.late.clone());
            }
        }

        let registry = Arc::new(LoggerRegistry::new());
        let late = Arc::new(MemoryLogger::new());
        registry.add(Arc::new(Registering {
            registry: registry.clone(),
            late: late.clone(),
        }));

        registry.log("first", LogLevel::Info);
        // The late sink joined after the snapshot was taken.
        assert!(late.records().is_empty());
        assert_eq!(registry.len(), 2);
    }
}
