use crate::ports::clock::ClockPort;
use web_sys::Performance;

/// Performance-API clock. Modal containers only exist in window scopes,
/// so worker scopes are not consulted.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn performance(&self) -> Option<Performance> {
        web_sys::window().and_then(|window| window.performance())
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        match self.performance() {
            Some(performance) => performance.now(),
            None => 0.0,
        }
    }

    fn is_available(&self) -> bool {
        self.performance().is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_clock_available_in_browser() {
        let clock = Clock::new();
        assert!(clock.is_available(), "Clock should be available");
    }

    #[wasm_bindgen_test]
    fn test_clock_monotonic_time() {
        let clock = Clock::new();
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1, "Time should be monotonic (t1={}, t2={})", t1, t2);
    }
}
