//! Particle Text Engine - interactive text as a particle field, in WASM
//!
//! A string is rasterized off-screen, sampled into particles on a pixel grid,
//! and every particle springs back toward its sampled pixel while the pointer
//! pushes it around.
//!
//! Architecture:
//! - core/        - Vector math, colors, randomness, console logging
//! - domain/      - Particle and configuration types
//! - systems/     - Rasterizer, sampler, motion, repulsion, frame drawing
//! - simulation/  - Orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

pub use domain::config::{ConfigError, EngineConfig, FillStyle, LayoutConfig, Parameter, SimConfig};
pub use domain::particle::Particle;
pub use simulation::{PerfStats, SimulationCore, TextParticles, DEFAULT_TEXT};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    crate::core::logging::install(level);

    log::info!("particle text engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
