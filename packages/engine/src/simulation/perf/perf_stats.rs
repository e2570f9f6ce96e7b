use wasm_bindgen::prelude::*;

/// Snapshot of the last tick (and last rebuild / pointer move)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) rebuild_ms: f64,
    pub(super) particles_drawn: u32,
    pub(super) particles_pushed: u32,
    pub(super) particle_count: u32,
    pub(super) line_count: u32,
}

impl PerfStats {
    /// Clear per-tick fields; rebuild and pointer figures persist until the
    /// next rebuild or pointer move
    pub(crate) fn reset_tick(&mut self) {
        self.tick_ms = 0.0;
        self.integrate_ms = 0.0;
        self.draw_ms = 0.0;
        self.particles_drawn = 0;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn rebuild_ms(&self) -> f64 { self.rebuild_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_drawn(&self) -> u32 { self.particles_drawn }
    #[wasm_bindgen(getter)]
    pub fn particles_pushed(&self) -> u32 { self.particles_pushed }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn line_count(&self) -> u32 { self.line_count }
}
