//! Packed color helpers.
//!
//! Colors are `u32` values in RGBA8888 order: `0xRRGGBBAA`.

pub const WHITE: u32 = 0xFFFF_FFFF;
pub const BLACK: u32 = 0x0000_00FF;
pub const RED: u32 = 0xFF00_00FF;
pub const GREEN: u32 = 0x00FF_00FF;
pub const BLUE: u32 = 0x0000_FFFF;

/// Pack four 8-bit channels into an RGBA8888 value.
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32)
}

/// Split an RGBA8888 value into its `[r, g, b, a]` channels.
#[inline]
pub const fn unpack_rgba(color: u32) -> [u8; 4] {
    color.to_be_bytes()
}

/// Flat-shade a packed color by multiplying the whole word by `intensity`.
///
/// The product is not normalized per channel: large intensities carry into
/// neighbouring channels, and anything past 32 bits wraps around (the float
/// is truncated through `i64`, then to its low 32 bits).
#[inline]
pub fn shade(color: u32, intensity: f32) -> u32 {
    (color as f32 * intensity) as i64 as u32
}
