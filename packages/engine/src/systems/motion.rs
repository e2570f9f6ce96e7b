//! Motion Integrator
//!
//! Semi-implicit damped spring toward home, one step per frame:
//!
//! ```text
//! velocity *= friction
//! position += velocity + (home - position) * ease
//! ```
//!
//! Friction bleeds energy and ease pulls toward home. With both in (0, 1) the
//! particle converges on home; no bound is enforced here, config validation
//! keeps the coefficients in range.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::config::SimConfig;
use crate::domain::particle::Particle;

/// Below this the rayon split costs more than it saves
#[cfg(feature = "parallel")]
const PARALLEL_MIN_PARTICLES: usize = 16_384;

#[inline]
pub fn integrate(p: &mut Particle, friction: f32, ease: f32) {
    p.velocity *= friction;
    let displacement = p.velocity + (p.home() - p.position) * ease;
    p.position += displacement;
}

/// Advance every particle one step
pub fn integrate_all(particles: &mut [Particle], config: &SimConfig) {
    let (friction, ease) = (config.friction, config.ease);

    #[cfg(feature = "parallel")]
    {
        if particles.len() >= PARALLEL_MIN_PARTICLES {
            particles
                .par_iter_mut()
                .for_each(|p| integrate(p, friction, ease));
            return;
        }
    }

    for p in particles.iter_mut() {
        integrate(p, friction, ease);
    }
}
