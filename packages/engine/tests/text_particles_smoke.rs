use particle_text_engine::{SimulationCore, TextParticles, DEFAULT_TEXT};

#[test]
fn hello_world_is_stable_across_rebuilds() {
    let mut core = SimulationCore::new(1000, 400);
    assert_eq!(core.text(), DEFAULT_TEXT);

    let mut first: Vec<(i32, i32)> = core
        .particles()
        .iter()
        .map(|p| (p.home().x as i32, p.home().y as i32))
        .collect();
    core.rebuild();
    let mut second: Vec<(i32, i32)> = core
        .particles()
        .iter()
        .map(|p| (p.home().x as i32, p.home().y as i32))
        .collect();

    first.sort_unstable();
    second.sort_unstable();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn particles_start_home_with_scattered_velocity() {
    let core = SimulationCore::new(640, 320);
    for p in core.particles() {
        assert_eq!(p.position, p.home());
        assert!(p.velocity.x > -640.0 && p.velocity.x <= 640.0);
        assert!(p.velocity.y > -320.0 && p.velocity.y <= 320.0);
    }
    assert!(core.particles().iter().any(|p| p.velocity.x != 0.0));
}

#[test]
fn facade_drives_the_loop() {
    let mut engine = TextParticles::new(320, 160);
    assert!(!engine.is_running());
    assert!(!engine.tick());

    engine.set_text("Hi");
    assert_eq!(engine.text(), "Hi");
    assert_eq!(engine.line_count(), 1);

    engine.start();
    assert!(engine.tick());
    engine.stop();
    assert!(!engine.tick());
    assert_eq!(engine.frame(), 1);

    let layout = engine.frame_layout();
    assert_eq!(layout.width(), 320);
    assert_eq!(layout.frame_len_elements(), 320 * 160);
    assert_eq!(engine.frame_len_bytes(), 320 * 160 * 4);
}

#[test]
fn facade_raw_parameters() {
    let mut engine = TextParticles::new(320, 160);
    let before = engine.particle_count();

    assert!(!engine.set_parameter_raw("sampleStride", "zero"));
    assert_eq!(engine.particle_count(), before);

    assert!(engine.set_parameter_raw("sampleStride", "3"));
    assert!(engine.particle_count() < before);
}
