//! Core building blocks shared by every system: vector math, packed colors,
//! the frame-local random source, and the console log sink.

pub mod color;
pub mod logging;
pub mod random;
pub mod vec2;

pub use color::Rgb;
pub use vec2::Vec2;
