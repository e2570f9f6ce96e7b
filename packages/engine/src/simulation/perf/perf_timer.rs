/// Millisecond stopwatch for per-tick metrics
///
/// `Date.now()` in the browser, a monotonic clock everywhere else.
#[derive(Clone, Copy)]
pub(crate) struct Stopwatch {
    started_ms: f64,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Stopwatch { started_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}
