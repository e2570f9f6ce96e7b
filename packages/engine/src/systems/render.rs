//! Frame drawing
//!
//! The frame is a packed ABGR buffer the JS side copies straight into an
//! `ImageData` (see `core::color`). Cleared pixels are fully transparent, like
//! `clearRect`.

use crate::domain::particle::Particle;

const CLEAR: u32 = 0x0000_0000;

pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![CLEAR; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len_elements(&self) -> usize {
        self.pixels.len()
    }

    pub fn len_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn clear(&mut self) {
        self.pixels.fill(CLEAR);
    }

    /// Fill the `side` x `side` square whose top-left corner is the pixel
    /// containing (x, y). Returns false when nothing landed on the canvas.
    pub fn fill_square(&mut self, x: f32, y: f32, side: u32, color: u32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let (x0, y0) = (x.floor() as i64, y.floor() as i64);
        let side = side as i64;
        let (w, h) = (self.width as i64, self.height as i64);

        let (start_x, end_x) = (x0.max(0), x0.saturating_add(side).min(w));
        let (start_y, end_y) = (y0.max(0), y0.saturating_add(side).min(h));
        if start_x >= end_x || start_y >= end_y {
            return false;
        }

        let stride = self.width as usize;
        for row in start_y..end_y {
            let base = row as usize * stride;
            self.pixels[base + start_x as usize..base + end_x as usize].fill(color);
        }
        true
    }
}

/// Draw every particle in collection order; returns how many were visible
pub fn draw_particles(frame: &mut FrameBuffer, particles: &[Particle], side: u32) -> u32 {
    let mut drawn = 0u32;
    for p in particles.iter() {
        if frame.fill_square(p.position.x, p.position.y, side, p.color().to_abgr()) {
            drawn += 1;
        }
    }
    drawn
}
