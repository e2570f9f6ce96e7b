//! Simulation core
//!
//! `SimulationCore` owns the particle set and everything that feeds it: the
//! current text, the configuration, the raster scratch bitmap, the frame
//! buffer and the frame loop gate. It only orchestrates; the actual work lives
//! in `systems/`.
//!
//! Every entry point takes `&mut self` and finishes its work before
//! returning, so a rebuild is never observed half-done by a tick or a pointer
//! event.

use crate::core::random::RandomSource;
use crate::domain::config::{ConfigError, EngineConfig};
use crate::domain::particle::Particle;
use crate::systems::raster::{Bitmap, TextRasterizer};
use crate::systems::render::FrameBuffer;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "schedule/frame_loop.rs"]
mod frame_loop;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_frame.rs"]
mod render_frame;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::TextParticles;
pub use perf_stats::PerfStats;

use frame_loop::FrameLoop;
use perf_timer::Stopwatch;

/// Text shown until the host sets its own
pub const DEFAULT_TEXT: &str = "Hello world";

pub(crate) struct FrameAbi {
    pub(crate) frame_ptr: *const u32,
    pub(crate) frame_len_elements: usize,
    pub(crate) frame_len_bytes: usize,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

pub struct SimulationCore {
    width: u32,
    height: u32,
    config: EngineConfig,
    text: String,
    rasterizer: Box<dyn TextRasterizer>,
    raster: Bitmap,
    particles: Vec<Particle>,
    frame_buffer: FrameBuffer,
    frame_loop: FrameLoop,
    rng: RandomSource,

    // State
    line_count: usize,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Canvas of the given size with the built-in bitmap font, showing
    /// [`DEFAULT_TEXT`]
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation_core(width, height)
    }

    /// Same, but rasterizing with a custom backend
    pub fn with_rasterizer(width: u32, height: u32, rasterizer: Box<dyn TextRasterizer>) -> Self {
        init::create_simulation_core_with_rasterizer(width, height, rasterizer)
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn particle_count(&self) -> u32 { self.particles.len() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    /// Lines of the current layout, including unassigned slots
    pub fn line_count(&self) -> usize { self.line_count }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The raster the current particle set was sampled from
    pub fn raster(&self) -> &Bitmap {
        &self.raster
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    // === INPUT ===

    /// Replace the text and rebuild the particle set
    pub fn set_text(&mut self, text: &str) {
        commands::set_text(self, text);
    }

    /// Swap the rasterizer backend and rebuild
    pub fn set_rasterizer(&mut self, rasterizer: Box<dyn TextRasterizer>) {
        commands::set_rasterizer(self, rasterizer);
    }

    /// Discard every particle and resample the current text
    pub fn rebuild(&mut self) {
        commands::rebuild(self);
    }

    /// Push particles away from the pointer; returns how many were hit
    pub fn pointer_move(&mut self, x: f32, y: f32) -> usize {
        commands::pointer_move(self, x, y)
    }

    // === CONFIGURATION ===

    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), ConfigError> {
        settings::set_parameter(self, name, value)
    }

    /// Raw input from a form field; anything unusable is ignored and the
    /// previous value kept. Returns whether the value was applied.
    pub fn set_parameter_raw(&mut self, name: &str, raw: &str) -> bool {
        settings::set_parameter_raw(self, name, raw)
    }

    pub fn get_parameter(&self, name: &str) -> Result<f64, ConfigError> {
        settings::get_parameter(self, name)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), ConfigError> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === RENDER LOOP ===

    pub fn start(&mut self) {
        if self.frame_loop.start() {
            log::debug!("render loop started at frame {}", self.frame);
        }
    }

    pub fn stop(&mut self) {
        if self.frame_loop.stop() {
            log::debug!("render loop stopped at frame {}", self.frame);
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// One animation-frame callback: renders a frame only while running
    pub fn tick(&mut self) -> bool {
        if !self.frame_loop.is_running() {
            return false;
        }
        self.step();
        true
    }

    /// Render exactly one frame regardless of the loop state
    pub fn step(&mut self) {
        step::step(self);
    }

    // === FRAME ABI ===

    /// Get pointer to the ABGR frame (for JS `ImageData`)
    pub fn frame_ptr(&self) -> *const u32 {
        render_frame::frame_ptr(self)
    }

    pub fn frame_len_elements(&self) -> usize {
        render_frame::frame_len_elements(self)
    }

    pub fn frame_len_bytes(&self) -> usize {
        render_frame::frame_len_bytes(self)
    }

    pub(crate) fn frame_abi(&self) -> FrameAbi {
        render_frame::frame_abi(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
