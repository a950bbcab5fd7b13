use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with 8-bit channels (`0`–`255`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Attention color used for the frozen diagnostic overlay.
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from `f32` channels in `0..=255`, clamping and truncating.
    ///
    /// Scene descriptions and user code frequently hand over computed values;
    /// out-of-range channels are pinned rather than wrapped.
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        #[inline]
        fn ch(v: f32) -> u8 {
            if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as u8 }
        }
        Self::new(ch(r), ch(g), ch(b), ch(a))
    }

    /// Packs the channels as `0xRRGGBBAA`.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }

    /// Alpha as a `[0, 1]` factor.
    #[inline]
    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_opaque_red() {
        let c = Rgba::new(255, 0, 0, 255);
        assert_eq!(c.packed(), 0xFF00_00FF);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn packed_keeps_channel_order() {
        assert_eq!(Rgba::new(0x12, 0x34, 0x56, 0x78).packed(), 0x1234_5678);
    }

    #[test]
    fn from_f32_clamps_out_of_range() {
        assert_eq!(Rgba::from_f32(300.0, -5.0, f32::NAN, 127.9), Rgba::new(255, 0, 0, 127));
    }

    #[test]
    fn transparent_alpha_is_zero() {
        assert_eq!(Rgba::new(10, 20, 30, 0).alpha(), 0.0);
    }
}
