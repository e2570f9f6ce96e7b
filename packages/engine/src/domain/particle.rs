use crate::core::{Rgb, Vec2};

/// One sampled pixel of the text raster
///
/// `home` and `color` are fixed at sampling time. A particle has no identity
/// beyond its home within one rebuild; rebuilding discards every particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    home: Vec2,
    color: Rgb,
}

impl Particle {
    /// Particle at rest on its home pixel
    pub fn new(home: Vec2, color: Rgb) -> Self {
        Self {
            position: home,
            velocity: Vec2::ZERO,
            home,
            color,
        }
    }

    #[inline]
    pub fn home(&self) -> Vec2 {
        self.home
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Distance left to travel before settling
    pub fn offset_from_home(&self) -> f32 {
        (self.home - self.position).length()
    }
}
