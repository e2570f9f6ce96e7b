//! Particle Sampler
//!
//! Walks the raster on a `stride` grid (row-major: y outer, x inner) and
//! emits one particle per visited pixel with nonzero alpha. Sampling order is
//! draw order, so later rows stack on top of earlier ones.

use crate::core::random::RandomSource;
use crate::core::Vec2;
use crate::domain::particle::Particle;
use crate::systems::raster::Bitmap;

/// Replace `out` with one resting particle per occupied grid pixel
pub fn sample(bitmap: &Bitmap, stride: u32, out: &mut Vec<Particle>) {
    out.clear();
    let step = stride.max(1) as usize;

    for y in (0..bitmap.height()).step_by(step) {
        for x in (0..bitmap.width()).step_by(step) {
            if bitmap.alpha(x, y) > 0 {
                out.push(Particle::new(Vec2::new(x as f32, y as f32), bitmap.rgb(x, y)));
            }
        }
    }
}

/// Kick every particle with a velocity uniform in (-W, W] x (-H, H] so the
/// text flies in from all over the canvas
pub fn scatter(particles: &mut [Particle], width: u32, height: u32, rng: &mut RandomSource) {
    let (w, h) = (width as f32, height as f32);
    for p in particles.iter_mut() {
        p.velocity.x += rng.next_f32() * -w * 2.0 + w;
        p.velocity.y += rng.next_f32() * -h * 2.0 + h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgb;

    #[test]
    fn single_opaque_pixel_yields_one_particle() {
        let mut bitmap = Bitmap::new(32, 32);
        bitmap.set_pixel(10, 10, Rgb(1, 2, 3), 255);

        let mut particles = Vec::new();
        sample(&bitmap, 1, &mut particles);

        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].home(), Vec2::new(10.0, 10.0));
        assert_eq!(particles[0].position, Vec2::new(10.0, 10.0));
        assert_eq!(particles[0].color(), Rgb(1, 2, 3));
        assert_eq!(particles[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn transparent_bitmap_yields_nothing() {
        let bitmap = Bitmap::new(64, 48);
        let mut particles = vec![Particle::new(Vec2::ZERO, Rgb::WHITE)];
        sample(&bitmap, 1, &mut particles);
        assert!(particles.is_empty());
    }

    #[test]
    fn any_nonzero_alpha_counts() {
        let mut bitmap = Bitmap::new(4, 4);
        bitmap.set_pixel(2, 1, Rgb::RED, 1);
        let mut particles = Vec::new();
        sample(&bitmap, 1, &mut particles);
        assert_eq!(particles.len(), 1);
    }

    #[test]
    fn stride_skips_off_grid_pixels() {
        let mut bitmap = Bitmap::new(10, 10);
        bitmap.set_pixel(3, 3, Rgb::RED, 255);
        bitmap.set_pixel(4, 4, Rgb::RED, 255);

        let mut particles = Vec::new();
        sample(&bitmap, 2, &mut particles);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].home(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn order_is_row_major() {
        let mut bitmap = Bitmap::new(8, 8);
        bitmap.set_pixel(5, 1, Rgb::RED, 255);
        bitmap.set_pixel(1, 2, Rgb::RED, 255);
        bitmap.set_pixel(2, 1, Rgb::RED, 255);

        let mut particles = Vec::new();
        sample(&bitmap, 1, &mut particles);
        let homes: Vec<Vec2> = particles.iter().map(|p| p.home()).collect();
        assert_eq!(
            homes,
            vec![Vec2::new(2.0, 1.0), Vec2::new(5.0, 1.0), Vec2::new(1.0, 2.0)]
        );
    }

    #[test]
    fn scatter_stays_within_canvas_extent() {
        let mut particles = vec![Particle::new(Vec2::ZERO, Rgb::WHITE); 500];
        let mut rng = RandomSource::with_seed(7);
        scatter(&mut particles, 300, 200, &mut rng);

        assert!(particles.iter().all(|p| p.velocity.x > -300.0 && p.velocity.x <= 300.0));
        assert!(particles.iter().all(|p| p.velocity.y > -200.0 && p.velocity.y <= 200.0));
        assert!(particles.iter().any(|p| p.velocity != Vec2::ZERO));
        // homes are untouched
        assert!(particles.iter().all(|p| p.home() == Vec2::ZERO));
    }
}
