use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct FrameLayout {
    frame_ptr: u32,
    frame_len_elements: u32,
    frame_len_bytes: u32,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl FrameLayout {
    #[wasm_bindgen(getter)]
    pub fn frame_ptr(&self) -> u32 { self.frame_ptr }
    #[wasm_bindgen(getter)]
    pub fn frame_len_elements(&self) -> u32 { self.frame_len_elements }
    #[wasm_bindgen(getter)]
    pub fn frame_len_bytes(&self) -> u32 { self.frame_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
}

/// JS-facing handle: one canvas worth of text particles
#[wasm_bindgen]
pub struct TextParticles {
    core: SimulationCore,
}

#[wasm_bindgen]
impl TextParticles {
    /// Create an engine for a canvas of the given size, showing "Hello world"
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn line_count(&self) -> u32 { self.core.line_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.core.is_running() }

    // === INPUT ===

    /// Replace the text; every particle is discarded and resampled
    pub fn set_text(&mut self, text: &str) {
        self.core.set_text(text);
    }

    pub fn text(&self) -> String {
        self.core.text().to_string()
    }

    /// Pointer (mouse/touch) position in canvas pixels
    pub fn pointer_move(&mut self, x: f32, y: f32) -> u32 {
        self.core.pointer_move(x, y) as u32
    }

    // === CONFIGURATION ===

    /// Set a named parameter; out-of-range values are rejected
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.core
            .set_parameter(name, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set a parameter from raw input-field text; unusable input is ignored
    pub fn set_parameter_raw(&mut self, name: &str, raw: &str) -> bool {
        self.core.set_parameter_raw(name, raw)
    }

    pub fn get_parameter(&self, name: &str) -> Result<f64, JsValue> {
        self.core
            .get_parameter(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER LOOP ===

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    /// Call from `requestAnimationFrame`; returns true when a new frame was
    /// written to the frame buffer
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    /// Render one frame even while stopped
    pub fn step(&mut self) {
        self.core.step();
    }

    // === FRAME ABI ===

    /// Get pointer to the ABGR frame buffer (for JS `ImageData`)
    pub fn frame_ptr(&self) -> *const u32 {
        self.core.frame_ptr()
    }

    pub fn frame_len_elements(&self) -> usize {
        self.core.frame_len_elements()
    }

    pub fn frame_len_bytes(&self) -> usize {
        self.core.frame_len_bytes()
    }

    pub fn frame_layout(&self) -> FrameLayout {
        let abi = self.core.frame_abi();
        FrameLayout {
            frame_ptr: abi.frame_ptr as u32,
            frame_len_elements: abi.frame_len_elements as u32,
            frame_len_bytes: abi.frame_len_bytes as u32,
            width: abi.width,
            height: abi.height,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TextParticles {
    /// Rasterize with the browser's fonts (`fontFamily` from the config)
    pub fn use_canvas_font(&mut self) -> Result<(), JsValue> {
        let font = crate::systems::raster::CanvasFont::new(self.core.width(), self.core.height())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core.set_rasterizer(Box::new(font));
        Ok(())
    }

    /// Back to the built-in pixel font
    pub fn use_bitmap_font(&mut self) {
        self.core
            .set_rasterizer(Box::new(crate::systems::raster::BitmapFont));
    }
}
