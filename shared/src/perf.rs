//! Timing spans that log only in debug builds.

/// Millisecond clock. The browser passes `performance.now`-style functions in.
pub type Clock = fn() -> f64;

#[must_use = "the span measures until it is dropped"]
pub struct PerfSpan {
    label: &'static str,
    clock: Option<Clock>,
    started_ms: f64,
}

impl PerfSpan {
    /// Uses the process clock on native targets; on wasm the span is inert
    /// unless a clock is supplied through [`PerfSpan::start_with`].
    pub fn start(label: &'static str) -> Self {
        Self::start_inner(label, default_clock())
    }

    pub fn start_with(label: &'static str, clock: Clock) -> Self {
        Self::start_inner(label, Some(clock))
    }

    fn start_inner(label: &'static str, clock: Option<Clock>) -> Self {
        let clock = if cfg!(debug_assertions) { clock } else { None };
        let started_ms = clock.map(|now| now()).unwrap_or_default();
        Self {
            label,
            clock,
            started_ms,
        }
    }

    /// Elapsed milliseconds so far, `None` when not measuring.
    pub fn elapsed_ms(&self) -> Option<f64> {
        self.clock.map(|now| (now() - self.started_ms).max(0.0))
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        if let Some(elapsed) = self.elapsed_ms() {
            tracing::debug!(label = self.label, elapsed_ms = elapsed, "perf");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_clock() -> Option<Clock> {
    use std::time::Instant;

    use once_cell::sync::Lazy;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    Some(|| ORIGIN.elapsed().as_secs_f64() * 1000.0)
}

#[cfg(target_arch = "wasm32")]
fn default_clock() -> Option<Clock> {
    None
}

#[cfg(all(test, debug_assertions, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn measures_with_supplied_clock() {
        fn fixed() -> f64 {
            42.0
        }
        let span = PerfSpan::start_with("fixed", fixed);
        assert_eq!(span.elapsed_ms(), Some(0.0));
    }

    #[test]
    fn native_clock_is_monotonic() {
        let span = PerfSpan::start("native");
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(span.elapsed_ms().unwrap_or_default() >= 1.0);
    }
}
