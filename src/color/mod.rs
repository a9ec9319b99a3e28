//! Logical colors
//!
//! A [`Color`] is the caller-facing channel sequence (R, G, B, W) before any
//! brightness scaling or channel reordering is applied.

mod palette;

use smart_leds::{RGB8, RGBW, White};

pub use palette::{AQUA, BLANK, BLUE, GREEN, ORANGE, PURPLE, RED, WHITE, YELLOW};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

/// Maximum number of channels a pixel can carry
pub const MAX_CHANNELS: usize = 4;

/// Logical RGBW color
///
/// The white channel stays zero when the color is built from an RGB value,
/// so RGB colors can be sent to RGBW strips without extra conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, w: 0 }
    }

    pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Channels in logical order
    pub const fn channels(self) -> [u8; MAX_CHANNELS] {
        [self.r, self.g, self.b, self.w]
    }

    /// Scale every channel by `brightness`, truncating toward zero.
    ///
    /// `brightness` is expected to be in `0.0..=1.0`. Values outside of it
    /// are not rejected; the float to byte conversion saturates.
    #[must_use]
    pub fn scaled(self, brightness: f32) -> Self {
        let [r, g, b, w] = self.channels().map(|channel| scale(channel, brightness));
        Self { r, g, b, w }
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(channel: u8, brightness: f32) -> u8 {
    libm::floorf(f32::from(channel) * brightness) as u8
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Self::rgb(color.r, color.g, color.b)
    }
}

impl From<Rgbw> for Color {
    fn from(color: Rgbw) -> Self {
        Self::rgbw(color.r, color.g, color.b, color.a.0)
    }
}

impl From<Color> for Rgbw {
    fn from(color: Color) -> Self {
        Rgbw {
            r: color.r,
            g: color.g,
            b: color.b,
            a: White(color.w),
        }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Rgb::new(color.r, color.g, color.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, w): (u8, u8, u8, u8)) -> Self {
        Self::rgbw(r, g, b, w)
    }
}
