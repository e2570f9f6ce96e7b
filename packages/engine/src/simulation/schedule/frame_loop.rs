/// Start/stop gate for the render loop
///
/// The host owns the actual `requestAnimationFrame` callback and calls
/// `tick()` from it; the gate decides whether that tick produces a frame.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FrameLoop {
    running: bool,
}

impl FrameLoop {
    /// Returns true when the loop was stopped before
    pub(crate) fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.running, true)
    }

    /// Returns true when the loop was running before
    pub(crate) fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }
}
