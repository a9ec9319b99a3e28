//! Channel order map
//!
//! Translates a logical channel index (0 = R, 1 = G, 2 = B, 3 = W) to the
//! byte offset inside a pixel's slot. Three-channel strips use only the
//! first three entries.

use crate::color::MAX_CHANNELS;

/// Fixed permutation from logical channel to physical byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrder([usize; MAX_CHANNELS]);

impl ChannelOrder {
    /// Physical slot order G, R, B, W used by WS2812-family LEDs
    pub const GRBW: Self = Self([1, 0, 2, 3]);

    /// Physical slot order matching logical order
    pub const RGBW: Self = Self([0, 1, 2, 3]);

    /// Create a channel order from a logical-to-physical table
    ///
    /// Returns `None` if the table is not a permutation of `0..4`, or if
    /// it moves the white channel into one of the RGB slots (which would
    /// leave three-channel strips without a valid mapping).
    pub const fn new(table: [usize; MAX_CHANNELS]) -> Option<Self> {
        if table[3] != 3 {
            return None;
        }
        let mut seen = [false; MAX_CHANNELS];
        let mut i = 0;
        while i < MAX_CHANNELS {
            let offset = table[i];
            if offset >= MAX_CHANNELS || seen[offset] {
                return None;
            }
            seen[offset] = true;
            i += 1;
        }
        Some(Self(table))
    }

    /// Physical offset of logical channel `channel`
    #[inline]
    pub const fn offset(self, channel: usize) -> usize {
        self.0[channel]
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::GRBW
    }
}
