use crate::core::random::RandomSource;
use crate::domain::config::EngineConfig;
use crate::systems::raster::{Bitmap, BitmapFont, TextRasterizer};
use crate::systems::render::FrameBuffer;

use super::frame_loop::FrameLoop;
use super::perf_stats::PerfStats;
use super::{SimulationCore, DEFAULT_TEXT};

pub(super) fn create_simulation_core(width: u32, height: u32) -> SimulationCore {
    create_simulation_core_with_rasterizer(width, height, Box::new(BitmapFont))
}

pub(super) fn create_simulation_core_with_rasterizer(
    width: u32,
    height: u32,
    rasterizer: Box<dyn TextRasterizer>,
) -> SimulationCore {
    let mut core = SimulationCore {
        width,
        height,
        config: EngineConfig::default(),
        text: DEFAULT_TEXT.to_string(),
        rasterizer,
        raster: Bitmap::new(width, height),
        // Sized for a short line of text at stride 1
        particles: Vec::with_capacity(16_384),
        frame_buffer: FrameBuffer::new(width, height),
        frame_loop: FrameLoop::default(),
        rng: RandomSource::from_clock(),
        line_count: 0,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    core.rebuild();
    core
}
