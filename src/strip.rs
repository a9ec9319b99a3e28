//! NeoPixel strip driver
//!
//! Owns the pixel buffer in device byte order and hands it to a
//! [`Bitstream`] line on [`NeoPixel::write`].
//!
//! The driver has no internal locking. Color and brightness operations
//! mutate the buffer synchronously and then suspend while the buffer is
//! transmitted, so callers sharing a strip between tasks must serialize
//! access themselves (see [`StripActor`](crate::StripActor)).

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bitstream::{Bitstream, BitstreamMode};
use crate::color::{BLANK, Color, MAX_CHANNELS};
use crate::error::Error;
use crate::order::ChannelOrder;
use crate::timing::{Protocol, Timing};

/// Brightness applied until the caller changes it
pub const DEFAULT_BRIGHTNESS: f32 = 0.02;

/// Raw pixel value in logical channel order
pub type Pixel = Vec<u8, MAX_CHANNELS>;

/// Number of channels per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PixelLayout {
    /// Red, green, blue
    #[default]
    Rgb = 3,
    /// Red, green, blue, white
    Rgbw = 4,
}

impl PixelLayout {
    pub const fn from_bytes_per_pixel(value: u8) -> Option<Self> {
        match value {
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgbw),
            _ => None,
        }
    }

    pub const fn bytes_per_pixel(self) -> usize {
        self as usize
    }
}

/// Buffer capacity needed for `pixels` pixels of `layout`
pub const fn buffer_size(pixels: usize, layout: PixelLayout) -> usize {
    pixels * layout.bytes_per_pixel()
}

/// Configuration for the strip driver
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    pub pixel_count: usize,
    pub layout: PixelLayout,
    pub protocol: Protocol,
    pub order: ChannelOrder,
    pub brightness: f32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            pixel_count: 0,
            layout: PixelLayout::Rgb,
            protocol: Protocol::Khz800,
            order: ChannelOrder::GRBW,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

/// WS2812-family strip driver
///
/// `BUF` is the buffer capacity in bytes, use [`buffer_size`] to compute it.
/// The line is borrowed for the lifetime of the driver and never released
/// or reconfigured by it.
pub struct NeoPixel<'a, L, const BUF: usize> {
    line: &'a mut L,
    pixel_count: usize,
    layout: PixelLayout,
    order: ChannelOrder,
    timing: Timing,
    buffer: Vec<u8, BUF>,
    brightness: f32,
    last_color: Color,
}

impl<'a, L: Bitstream, const BUF: usize> NeoPixel<'a, L, BUF> {
    /// Create a new strip driver
    ///
    /// The buffer starts zeroed, brightness is [`DEFAULT_BRIGHTNESS`].
    pub fn new(
        line: &'a mut L,
        pixel_count: usize,
        layout: PixelLayout,
        protocol: impl Into<Protocol>,
    ) -> Result<Self, Error<L::Error>> {
        let config = StripConfig {
            pixel_count,
            layout,
            protocol: protocol.into(),
            ..StripConfig::default()
        };
        Self::with_config(line, &config)
    }

    /// Create a new strip driver from a full configuration
    pub fn with_config(line: &'a mut L, config: &StripConfig) -> Result<Self, Error<L::Error>> {
        let required = buffer_size(config.pixel_count, config.layout);
        let mut buffer = Vec::new();
        buffer.resize(required, 0).map_err(|()| Error::Capacity {
            required,
            capacity: BUF,
        })?;

        Ok(Self {
            line,
            pixel_count: config.pixel_count,
            layout: config.layout,
            order: config.order,
            timing: config.protocol.timing(),
            buffer,
            brightness: config.brightness,
            last_color: BLANK,
        })
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        self.pixel_count
    }

    pub const fn is_empty(&self) -> bool {
        self.pixel_count == 0
    }

    /// Output line the strip transmits on
    pub fn line(&self) -> &L {
        &*self.line
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    pub const fn timing(&self) -> Timing {
        self.timing
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Last color requested through [`Self::set_color`], unscaled
    pub const fn last_color(&self) -> Color {
        self.last_color
    }

    /// Physical buffer, exactly as it will be transmitted
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Write a raw pixel value in logical channel order
    ///
    /// The value is not brightness scaled and does not touch the last color.
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<(), Error<L::Error>> {
        let offset = self.slot(index)?;
        self.check_channels(value)?;
        for (channel, &byte) in value.iter().enumerate() {
            self.buffer[offset + self.order.offset(channel)] = byte;
        }
        Ok(())
    }

    /// Read a raw pixel value in logical channel order
    pub fn get(&self, index: usize) -> Result<Pixel, Error<L::Error>> {
        let offset = self.slot(index)?;
        Ok((0..self.layout.bytes_per_pixel())
            .map(|channel| self.buffer[offset + self.order.offset(channel)])
            .collect())
    }

    /// Write the same raw value into every pixel
    ///
    /// Bypasses brightness and leaves the last color untouched.
    pub fn fill(&mut self, value: &[u8]) -> Result<(), Error<L::Error>> {
        self.check_channels(value)?;
        let bpp = self.layout.bytes_per_pixel();
        for (channel, &byte) in value.iter().enumerate() {
            let offset = self.order.offset(channel);
            for slot in self.buffer.chunks_exact_mut(bpp) {
                slot[offset] = byte;
            }
        }
        Ok(())
    }

    /// Set the pixel at `index` to `color` scaled by the current brightness,
    /// then transmit the buffer.
    ///
    /// `color` is remembered as the last color even if the write fails.
    pub async fn set_color(
        &mut self,
        index: usize,
        color: impl Into<Color>,
    ) -> Result<(), Error<L::Error>> {
        self.last_color = color.into();
        self.redraw(index).await
    }

    /// Re-render the last color at `index` with the current brightness,
    /// then transmit the buffer.
    pub async fn redraw(&mut self, index: usize) -> Result<(), Error<L::Error>> {
        let channels = self.last_color.scaled(self.brightness).channels();
        self.set(index, &channels[..self.layout.bytes_per_pixel()])?;
        self.write().await
    }

    /// Change the brightness and re-render the last color at pixel 0.
    ///
    /// Only pixel 0 is recomputed. Other pixels keep the bytes written at
    /// the brightness that was active back then.
    pub async fn set_brightness(&mut self, brightness: f32) -> Result<(), Error<L::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[NeoPixel.set_brightness] brightness {}", brightness);
        self.brightness = brightness;
        self.redraw(0).await
    }

    /// Transmit the buffer as-is
    ///
    /// Resolves once the line reports the waveform has been emitted.
    /// Dropping the future before that leaves the line output undefined;
    /// the buffer itself stays intact.
    pub async fn write(&mut self) -> Result<(), Error<L::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[NeoPixel.write] sending {} bytes", self.buffer.len());
        self.line
            .bitstream(BitstreamMode::HighLow, &self.timing, &self.buffer)
            .await
            .map_err(Error::Transmit)
    }

    /// Byte offset of the pixel slot at `index`
    fn slot(&self, index: usize) -> Result<usize, Error<L::Error>> {
        if index >= self.pixel_count {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.pixel_count,
            });
        }
        Ok(index * self.layout.bytes_per_pixel())
    }

    fn check_channels(&self, value: &[u8]) -> Result<(), Error<L::Error>> {
        let expected = self.layout.bytes_per_pixel();
        if value.len() != expected {
            return Err(Error::ChannelCount {
                expected,
                actual: value.len(),
            });
        }
        Ok(())
    }
}
