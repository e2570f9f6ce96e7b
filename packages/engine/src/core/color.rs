//! Packed color helpers
//!
//! Frame buffers use ABGR so that on little-endian hosts the bytes land as
//! [R, G, B, A], which is exactly the layout of a Canvas `ImageData`.

use serde::{Deserialize, Serialize};

/// Opaque RGB color, serialized as `[r, g, b]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const FUCHSIA: Rgb = Rgb(255, 0, 255);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    #[inline]
    pub fn r(self) -> u8 { self.0 }
    #[inline]
    pub fn g(self) -> u8 { self.1 }
    #[inline]
    pub fn b(self) -> u8 { self.2 }

    /// Pack as fully opaque ABGR
    #[inline]
    pub fn to_abgr(self) -> u32 {
        (0xFFu32 << 24) | ((self.2 as u32) << 16) | ((self.1 as u32) << 8) | (self.0 as u32)
    }

    /// Inverse of [`Rgb::to_abgr`]; alpha is dropped
    #[inline]
    pub fn from_abgr(packed: u32) -> Self {
        Rgb(
            (packed & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            ((packed >> 16) & 0xFF) as u8,
        )
    }

    /// Per-channel linear interpolation, `t` clamped to [0, 1]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}
