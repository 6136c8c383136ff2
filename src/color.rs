// Simple color struct, created from an unsigned 32 holding 0xRRGGBB.
// Alpha is supplied per draw call, since every particle and line has its own.

#[cfg(feature = "serde")]
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    // CSS color string understood by fillStyle / strokeStyle
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}
