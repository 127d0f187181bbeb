//! Colors
//!
//! The grid is driven with 24-bit colors. Consumers can pass either an
//! [`Rgb`] triple or a packed `0xRRGGBB` value; HSV input is converted
//! to RGB before packing.

/// 24-bit RGB color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0xRRGGBB`
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from `0xRRGGBB`
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Convert from HSV
    ///
    /// - `hue`: degrees, 0-360
    /// - `saturation`: 0-1
    /// - `value`: 0-1
    ///
    /// Channels are scaled by 255 and truncated.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let (r, g, b) = hsv_to_unit_rgb(hue / 360.0, saturation, value);
        Self::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    /// Scale every channel by `factor` (0-1), truncating
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// The channels as an `[r, g, b]` array
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Rgb::from_hex(hex)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Standard sextant HSV conversion with `h` in turns (0-1)
fn hsv_to_unit_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }

    let scaled = h * 6.0;
    let sextant = scaled as i32;
    let f = scaled - sextant as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sextant.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

// `as` saturates, so out-of-range input clamps instead of wrapping
fn unit_to_byte(channel: f32) -> u8 {
    (channel * 255.0) as u8
}
