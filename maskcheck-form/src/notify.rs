//! Toast sinks.

use parking_lot::Mutex;

use maskcheck_core::traits::Notifier;
use maskcheck_core::types::Toast;

/// Collects every toast in order.
///
/// Used by the CLI to print notifications after a run, and by tests to
/// assert on them.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every toast raised so far.
    pub fn all(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    /// Returns only the error toasts.
    pub fn errors(&self) -> Vec<Toast> {
        self.toasts.lock().iter().filter(|t| t.is_error()).cloned().collect()
    }

    /// Removes and returns every toast raised so far.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock())
    }

    /// Number of toasts raised.
    pub fn len(&self) -> usize {
        self.toasts.lock().len()
    }

    /// Returns true if no toast was raised.
    pub fn is_empty(&self) -> bool {
        self.toasts.lock().is_empty()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_order() {
        let log = ToastLog::new();
        log.notify(Toast::success("one"));
        log.notify(Toast::error("two"));
        log.notify(Toast::success("three"));

        let messages: Vec<_> = log.all().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, ["one", "two", "three"]);
        assert_eq!(log.errors().len(), 1);
    }

    #[test]
    fn test_drain_empties() {
        let log = ToastLog::new();
        log.notify(Toast::error("x"));
        assert_eq!(log.drain().len(), 1);
        assert!(log.is_empty());
    }
}
