use crate::domain::config::LayoutConfig;

use super::glyphs::{FIRST_GLYPH, GLYPHS, LAST_GLYPH};
use super::{Bitmap, RasterError, TextLayout, TextRasterizer};

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Horizontal advance per character, in glyph cells
const ADVANCE_COLS: f32 = 6.0;
/// Cells per em; `font_size / EM_ROWS` is the size of one cell in pixels
const EM_ROWS: f32 = 10.0;
/// Glyphs sit vertically centered inside their em box
const TOP_PAD_ROWS: f32 = (EM_ROWS - GLYPH_ROWS as f32) / 2.0;

/// Built-in 5x7 pixel font scaled to the configured font size
///
/// Deterministic on every target, which makes it the backend for native
/// builds and tests. Characters outside printable ASCII draw as `?`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapFont;

impl BitmapFont {
    fn cell(layout: &LayoutConfig) -> f32 {
        layout.font_size / EM_ROWS
    }

    fn glyph(ch: char) -> &'static [u8; GLYPH_ROWS] {
        let code = u32::from(ch);
        let index = if (FIRST_GLYPH as u32..=LAST_GLYPH as u32).contains(&code) {
            code - FIRST_GLYPH as u32
        } else {
            u32::from(b'?' - FIRST_GLYPH)
        };
        &GLYPHS[index as usize]
    }
}

impl TextRasterizer for BitmapFont {
    fn measure(&mut self, text: &str, layout: &LayoutConfig) -> f32 {
        text.chars().count() as f32 * ADVANCE_COLS * Self::cell(layout)
    }

    fn render(
        &mut self,
        lines: &TextLayout,
        layout: &LayoutConfig,
        target: &mut Bitmap,
    ) -> Result<(), RasterError> {
        let cell = Self::cell(layout);
        for line in lines.lines.iter() {
            let width = self.measure(&line.text, layout);
            let left = line.center_x - width / 2.0;
            let top = line.top_y + TOP_PAD_ROWS * cell;

            for (i, ch) in line.text.chars().enumerate() {
                let glyph_left = left + i as f32 * ADVANCE_COLS * cell;
                for (row, bits) in Self::glyph(ch).iter().enumerate() {
                    for col in 0..GLYPH_COLS {
                        if bits & (0x10 >> col) == 0 {
                            continue;
                        }
                        let x0 = glyph_left + col as f32 * cell;
                        let y0 = top + row as f32 * cell;
                        target.fill_rect(x0, y0, x0 + cell, y0 + cell, &layout.fill);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgb;
    use crate::domain::config::FillStyle;
    use crate::systems::raster::rasterize;

    fn solid_layout(font_size: f32) -> LayoutConfig {
        LayoutConfig {
            font_size,
            line_height: font_size,
            fill: FillStyle::Solid { color: Rgb::WHITE },
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn measure_counts_trailing_space() {
        let layout = solid_layout(10.0);
        let mut font = BitmapFont;
        assert_eq!(font.measure("ab", &layout), 12.0);
        assert_eq!(font.measure("ab ", &layout), 18.0);
    }

    #[test]
    fn single_glyph_lights_expected_cells() {
        // cell = 1px, so 'I' paints exactly its lit bits
        let layout = solid_layout(10.0);
        let mut bitmap = Bitmap::new(40, 40);
        rasterize(&mut BitmapFont, "I", &layout, &mut bitmap).unwrap();
        let lit: u32 = GLYPHS[(b'I' - FIRST_GLYPH) as usize]
            .iter()
            .map(|row| row.count_ones())
            .sum();
        assert_eq!(bitmap.opaque_pixel_count(), lit as usize);
    }

    #[test]
    fn text_is_centered_on_canvas() {
        let layout = solid_layout(20.0);
        let mut bitmap = Bitmap::new(200, 100);
        rasterize(&mut BitmapFont, "H", &layout, &mut bitmap).unwrap();

        let (mut min_x, mut max_x) = (u32::MAX, 0);
        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                if bitmap.alpha(x, y) > 0 {
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                }
            }
        }
        // "H " spans 24px starting at 100 - 12 = 88; 'H' covers the first 10
        assert_eq!(min_x, 88);
        assert_eq!(max_x, 97);
    }

    #[test]
    fn non_ascii_falls_back_to_question_mark() {
        assert_eq!(BitmapFont::glyph('é'), BitmapFont::glyph('?'));
        assert_eq!(BitmapFont::glyph('A'), &GLYPHS[(b'A' - FIRST_GLYPH) as usize]);
    }
}
