/// Console-shaped logging port for the notifier's diagnostics.
///
/// - WASM: browser console API
/// - Native: stdout/stderr
pub trait LoggerPort: Send + Sync {
    /// Informational message.
    fn log(&self, message: &str);

    /// Error message, emitted before a failure surfaces to the caller.
    fn error(&self, message: &str);

    /// Warning message, e.g. a selector that matched nothing at bind time.
    fn warn(&self, message: &str);

    /// Starts the timer labelled `label`.
    fn time(&self, label: &str);

    /// Ends the timer labelled `label` and logs the elapsed duration.
    fn time_end(&self, label: &str);
}
