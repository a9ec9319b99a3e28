//! Bitstream timing
//!
//! Every bit is sent as a high pulse followed by a low pulse. The pulse
//! widths are picked by the bit value and are described by a [`Timing`]
//! quadruple in nanoseconds.

use embassy_time::Duration;

/// High/low pulse widths (ns) for bit values 0 and 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timing {
    pub high_0: u32,
    pub low_0: u32,
    pub high_1: u32,
    pub low_1: u32,
}

impl Timing {
    /// ~800 kHz WS2812 timing
    pub const KHZ_800: Self = Self::new(400, 850, 800, 450);

    /// ~400 kHz WS2811 timing
    pub const KHZ_400: Self = Self::new(800, 1700, 1600, 900);

    pub const fn new(high_0: u32, low_0: u32, high_1: u32, low_1: u32) -> Self {
        Self {
            high_0,
            low_0,
            high_1,
            low_1,
        }
    }

    /// Timing as `(high_0, low_0, high_1, low_1)`
    pub const fn as_array(self) -> [u32; 4] {
        [self.high_0, self.low_0, self.high_1, self.low_1]
    }

    /// High and low pulse widths for a single bit
    #[inline]
    pub const fn pulse(self, bit: bool) -> (u32, u32) {
        if bit {
            (self.high_1, self.low_1)
        } else {
            (self.high_0, self.low_0)
        }
    }

    /// Total time (ns) a single bit occupies on the line
    #[inline]
    pub const fn bit_period(self, bit: bool) -> u32 {
        let (high, low) = self.pulse(bit);
        high.saturating_add(low)
    }

    /// Time needed to emit `data`, MSB first
    pub fn frame_duration(self, data: &[u8]) -> Duration {
        let nanos = data
            .iter()
            .map(|byte| {
                let ones = u64::from(byte.count_ones());
                let zeros = 8 - ones;
                ones * u64::from(self.bit_period(true)) + zeros * u64::from(self.bit_period(false))
            })
            .sum();
        Duration::from_nanos(nanos)
    }
}

impl From<[u32; 4]> for Timing {
    fn from([high_0, low_0, high_1, low_1]: [u32; 4]) -> Self {
        Self::new(high_0, low_0, high_1, low_1)
    }
}

impl From<(u32, u32, u32, u32)> for Timing {
    fn from((high_0, low_0, high_1, low_1): (u32, u32, u32, u32)) -> Self {
        Self::new(high_0, low_0, high_1, low_1)
    }
}

/// Protocol variant the strip speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// ~800 kHz variant
    #[default]
    Khz800,
    /// ~400 kHz variant
    Khz400,
    /// Caller supplied timing, used verbatim
    Custom(Timing),
}

impl Protocol {
    /// Resolve the integer protocol selector
    ///
    /// Any non-zero value selects the 800 kHz variant, zero selects 400 kHz.
    pub const fn from_raw(value: u8) -> Self {
        if value == 0 { Self::Khz400 } else { Self::Khz800 }
    }

    /// Timing quadruple for this protocol
    pub const fn timing(self) -> Timing {
        match self {
            Self::Khz800 => Timing::KHZ_800,
            Self::Khz400 => Timing::KHZ_400,
            Self::Custom(timing) => timing,
        }
    }
}

impl From<Timing> for Protocol {
    fn from(timing: Timing) -> Self {
        Self::Custom(timing)
    }
}

impl From<[u32; 4]> for Protocol {
    fn from(timing: [u32; 4]) -> Self {
        Self::Custom(timing.into())
    }
}

impl From<bool> for Protocol {
    fn from(fast: bool) -> Self {
        if fast { Self::Khz800 } else { Self::Khz400 }
    }
}
