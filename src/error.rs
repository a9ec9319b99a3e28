use core::fmt;

/// Errors returned by the strip driver
///
/// `E` is the error type of the underlying [`Bitstream`](crate::Bitstream)
/// line. It is passed through unchanged; the driver never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Pixel index is not in `0..len`
    IndexOutOfRange { index: usize, len: usize },
    /// Color value has a different number of channels than the strip
    ChannelCount { expected: usize, actual: usize },
    /// Pixel buffer capacity is too small for the requested strip
    Capacity { required: usize, capacity: usize },
    /// Transmission failed on the line
    Transmit(E),
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range for strip of {len}")
            }
            Self::ChannelCount { expected, actual } => {
                write!(f, "expected {expected} channels, got {actual}")
            }
            Self::Capacity { required, capacity } => {
                write!(f, "strip needs {required} bytes, buffer holds {capacity}")
            }
            Self::Transmit(err) => write!(f, "transmission failed: {err}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for Error<E> {}
