use crate::systems::{motion, render};

use super::{SimulationCore, Stopwatch};

/// One render-loop frame: clear, integrate, draw
pub(super) fn step(world: &mut SimulationCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset_tick();
    }
    let tick_timer = perf_on.then(Stopwatch::start);

    world.frame_buffer.clear();

    let t0 = perf_on.then(Stopwatch::start);
    motion::integrate_all(&mut world.particles, &world.config.sim);
    if let Some(t) = t0 {
        world.perf_stats.integrate_ms = t.elapsed_ms();
    }

    let t0 = perf_on.then(Stopwatch::start);
    let drawn = render::draw_particles(
        &mut world.frame_buffer,
        &world.particles,
        world.config.sim.particle_width,
    );
    if let Some(t) = t0 {
        world.perf_stats.draw_ms = t.elapsed_ms();
    }

    if let Some(t) = tick_timer {
        world.perf_stats.particles_drawn = drawn;
        world.perf_stats.particle_count = world.particles.len() as u32;
        world.perf_stats.line_count = world.line_count as u32;
        world.perf_stats.tick_ms = t.elapsed_ms();
    }

    world.frame += 1;
}
