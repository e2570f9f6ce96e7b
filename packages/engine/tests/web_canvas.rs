#![cfg(target_arch = "wasm32")]

use particle_text_engine::TextParticles;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn canvas_font_samples_particles() {
    let mut engine = TextParticles::new(800, 300);
    engine.use_canvas_font().unwrap();
    assert!(engine.particle_count() > 0);

    engine.use_bitmap_font();
    assert!(engine.particle_count() > 0);
}

#[wasm_bindgen_test]
fn facade_rejects_out_of_range_parameters() {
    let mut engine = TextParticles::new(200, 100);
    assert!(engine.set_parameter("friction", 2.0).is_err());
    assert!(engine.set_parameter("nope", 1.0).is_err());
    assert_eq!(engine.get_parameter("friction").unwrap(), 0.5);
}
