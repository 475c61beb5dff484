/// Port for reading time when the show-transition timer is enabled.
pub trait ClockPort: Send + Sync {
    /// Current timestamp in milliseconds.
    fn now(&self) -> f64;

    /// Whether a timing source exists in the current scope.
    fn is_available(&self) -> bool;
}
