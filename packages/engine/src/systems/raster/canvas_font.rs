//! Browser-backed rasterizer
//!
//! Draws through an `OffscreenCanvas` 2D context so the configured CSS font
//! family is honored, then reads the pixels back with `getImageData`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{OffscreenCanvas, OffscreenCanvasRenderingContext2d};

use crate::core::Rgb;
use crate::domain::config::{FillStyle, LayoutConfig};

use super::{Bitmap, RasterError, TextLayout, TextRasterizer};

pub struct CanvasFont {
    width: u32,
    height: u32,
    ctx: OffscreenCanvasRenderingContext2d,
}

fn js_err(e: JsValue) -> RasterError {
    RasterError::Canvas(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

fn css(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.0, color.1, color.2)
}

impl CanvasFont {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let canvas = OffscreenCanvas::new(width, height).map_err(js_err)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| RasterError::Canvas("2d context unavailable".to_string()))?
            .dyn_into::<OffscreenCanvasRenderingContext2d>()
            .map_err(|_| RasterError::Canvas("unexpected context type".to_string()))?;
        Ok(Self { width, height, ctx })
    }

    #[allow(deprecated)]
    fn apply_fill(&self, fill: &FillStyle) -> Result<(), RasterError> {
        match fill {
            FillStyle::Solid { color } => {
                self.ctx.set_fill_style(&JsValue::from_str(&css(*color)));
            }
            FillStyle::LinearGradient { stops } => {
                let gradient =
                    self.ctx
                        .create_linear_gradient(0.0, 0.0, self.width as f64, self.height as f64);
                for stop in stops.iter() {
                    gradient
                        .add_color_stop(stop.offset, &css(stop.color))
                        .map_err(js_err)?;
                }
                self.ctx.set_fill_style(&gradient);
            }
        }
        Ok(())
    }
}

impl TextRasterizer for CanvasFont {
    fn measure(&mut self, text: &str, layout: &LayoutConfig) -> f32 {
        self.ctx.set_font(&layout.css_font());
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }

    fn render(
        &mut self,
        lines: &TextLayout,
        layout: &LayoutConfig,
        target: &mut Bitmap,
    ) -> Result<(), RasterError> {
        let (w, h) = (self.width as f64, self.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_font(&layout.css_font());
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("top");
        self.apply_fill(&layout.fill)?;

        for line in lines.lines.iter() {
            self.ctx
                .fill_text(&line.text, line.center_x as f64, line.top_y as f64)
                .map_err(js_err)?;
        }

        let image = self.ctx.get_image_data(0.0, 0.0, w, h).map_err(js_err)?;
        target.copy_from_rgba(&image.data())
    }
}
