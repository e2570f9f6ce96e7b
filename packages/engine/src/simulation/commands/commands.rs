use crate::core::Vec2;
use crate::systems::raster::{rasterize, TextRasterizer};
use crate::systems::{repulsion, sampler};

use super::{SimulationCore, Stopwatch};

pub(super) fn set_text(world: &mut SimulationCore, text: &str) {
    if world.text != text {
        world.text.clear();
        world.text.push_str(text);
    }
    rebuild(world);
}

pub(super) fn set_rasterizer(world: &mut SimulationCore, rasterizer: Box<dyn TextRasterizer>) {
    world.rasterizer = rasterizer;
    rebuild(world);
}

/// Rasterize -> sample -> scatter. The old particle set is dropped first, so
/// a failed raster leaves an empty (but consistent) set.
pub(super) fn rebuild(world: &mut SimulationCore) {
    let timer = world.perf_enabled.then(Stopwatch::start);

    world.particles.clear();
    world.line_count = 0;

    match rasterize(
        world.rasterizer.as_mut(),
        &world.text,
        &world.config.layout,
        &mut world.raster,
    ) {
        Ok(layout) => {
            world.line_count = layout.line_count;
            sampler::sample(&world.raster, world.config.sim.sample_stride, &mut world.particles);
            sampler::scatter(&mut world.particles, world.width, world.height, &mut world.rng);
        }
        Err(e) => {
            world.raster.clear();
            log::warn!("text rasterization failed: {}", e);
        }
    }

    log::debug!(
        "rebuilt {} particles from {} line(s) at stride {}",
        world.particles.len(),
        world.line_count,
        world.config.sim.sample_stride
    );

    if let Some(t) = timer {
        world.perf_stats.rebuild_ms = t.elapsed_ms();
        world.perf_stats.particle_count = world.particles.len() as u32;
        world.perf_stats.line_count = world.line_count as u32;
    }
}

pub(super) fn pointer_move(world: &mut SimulationCore, x: f32, y: f32) -> usize {
    let pushed = repulsion::repel(&mut world.particles, Vec2::new(x, y), &world.config.sim);
    if world.perf_enabled {
        world.perf_stats.particles_pushed = pushed as u32;
    }
    pushed
}
