//! Pointer Repulsion
//!
//! Particles closer than the radius (compared squared, strict `<`) receive an
//! impulse of `radius_sq / dist_sq` directed away from the pointer, then take
//! one integrator step on the spot so the push shows up before the next frame.

use crate::core::Vec2;
use crate::domain::config::SimConfig;
use crate::domain::particle::Particle;
use crate::systems::motion::integrate;

/// Squared distances are clamped to this before dividing; a particle exactly
/// under the pointer gets a finite push of `radius_sq` along angle 0
pub const MIN_DISTANCE_SQUARED: f32 = 1.0;

/// Returns how many particles were pushed
pub fn repel(particles: &mut [Particle], pointer: Vec2, config: &SimConfig) -> usize {
    let radius_sq = config.repulsion_radius_squared;
    let mut pushed = 0;

    for p in particles.iter_mut() {
        let delta = pointer - p.position;
        let dist_sq = delta.length_squared();
        let inside = dist_sq < radius_sq;
        if !inside {
            continue;
        }

        let push = -radius_sq / dist_sq.max(MIN_DISTANCE_SQUARED);
        let angle = delta.y.atan2(delta.x);
        p.velocity += Vec2::from_angle(angle) * push;
        integrate(p, config.friction, config.ease);
        pushed += 1;
    }

    pushed
}
