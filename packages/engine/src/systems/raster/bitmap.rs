use crate::core::Rgb;
use crate::domain::config::FillStyle;

use super::RasterError;

/// Off-screen RGBA8 raster, laid out like a Canvas `ImageData`
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Fully transparent bitmap
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Replace the pixels with an `ImageData` readback of the same size
    pub fn copy_from_rgba(&mut self, rgba: &[u8]) -> Result<(), RasterError> {
        if rgba.len() != self.data.len() {
            return Err(RasterError::SizeMismatch {
                expected: self.data.len(),
                actual: rgba.len(),
            });
        }
        self.data.copy_from_slice(rgba);
        Ok(())
    }

    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset(x, y) + 3]
    }

    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb, alpha: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&[color.0, color.1, color.2, alpha]);
    }

    /// Paint the pixels whose top-left corner falls in [x0, x1) x [y0, y1),
    /// at least one pixel per axis, clipped to the bitmap
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, fill: &FillStyle) {
        let (start_x, end_x) = pixel_span(x0, x1, self.width);
        let (start_y, end_y) = pixel_span(y0, y1, self.height);
        for y in start_y..end_y {
            for x in start_x..end_x {
                let color = fill.color_at(x as f32, y as f32, self.width, self.height);
                self.set_pixel(x, y, color, 255);
            }
        }
    }

    pub fn opaque_pixel_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] > 0).count()
    }
}

fn pixel_span(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
    let start = lo.round();
    let end = hi.round().max(start + 1.0);
    let clamp = |v: f32| v.clamp(0.0, limit as f32) as u32;
    (clamp(start), clamp(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut bitmap = Bitmap::new(10, 10);
        let fill = FillStyle::Solid { color: Rgb::WHITE };
        bitmap.fill_rect(-5.0, -5.0, 2.0, 3.0, &fill);
        assert_eq!(bitmap.opaque_pixel_count(), 6);
        assert_eq!(bitmap.alpha(1, 2), 255);
        assert_eq!(bitmap.alpha(2, 2), 0);
    }

    #[test]
    fn fill_rect_paints_at_least_one_pixel() {
        let mut bitmap = Bitmap::new(10, 10);
        let fill = FillStyle::Solid { color: Rgb(9, 8, 7) };
        bitmap.fill_rect(4.1, 4.1, 4.2, 4.2, &fill);
        assert_eq!(bitmap.opaque_pixel_count(), 1);
        assert_eq!(bitmap.rgb(4, 4), Rgb(9, 8, 7));
    }

    #[test]
    fn copy_from_rgba_rejects_wrong_length() {
        let mut bitmap = Bitmap::new(2, 2);
        assert!(bitmap.copy_from_rgba(&[0; 15]).is_err());
        assert!(bitmap.copy_from_rgba(&[255; 16]).is_ok());
        assert_eq!(bitmap.opaque_pixel_count(), 4);
    }
}
