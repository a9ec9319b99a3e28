//! Bit-serial transmission contract
//!
//! The driver does not generate the waveform itself. It hands the pixel
//! buffer to a platform [`Bitstream`] implementation together with the
//! pulse ordering and the timing quadruple.

use core::future::Future;
use core::iter::FusedIterator;

use crate::timing::Timing;

/// Pulse ordering within a single bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BitstreamMode {
    /// High pulse first, then low pulse; widths are picked by the bit value
    HighLow = 0,
}

/// Output line able to emit a timed bitstream
///
/// Implement this trait to support different hardware platforms. The
/// implementation must serialize `data` MSB first, byte after byte, and
/// resolve only once the whole waveform has been emitted. Blocking for the
/// duration of the transfer is allowed.
pub trait Bitstream {
    /// Error reported by the platform
    type Error;

    /// Emit `data` on the line
    fn bitstream(
        &mut self,
        mode: BitstreamMode,
        timing: &Timing,
        data: &[u8],
    ) -> impl Future<Output = Result<(), Self::Error>>;
}

/// A single high/low pulse pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub high_ns: u32,
    pub low_ns: u32,
}

/// Encode `data` into pulse pairs, one per bit, MSB first
///
/// Useful for platforms that drive a pulse-code peripheral instead of
/// bit-banging the line.
pub fn pulses<'a>(timing: &Timing, data: &'a [u8]) -> Pulses<'a> {
    Pulses {
        timing: *timing,
        data,
        bit: 0,
    }
}

/// Iterator returned by [`pulses`]
#[derive(Debug, Clone)]
pub struct Pulses<'a> {
    timing: Timing,
    data: &'a [u8],
    bit: u8,
}

impl Iterator for Pulses<'_> {
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        let (&byte, rest) = self.data.split_first()?;
        let value = byte & (0x80 >> self.bit) != 0;
        self.bit += 1;
        if self.bit == 8 {
            self.bit = 0;
            self.data = rest;
        }
        let (high_ns, low_ns) = self.timing.pulse(value);
        Some(Pulse { high_ns, low_ns })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() * 8 - usize::from(self.bit);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pulses<'_> {}

impl FusedIterator for Pulses<'_> {}
