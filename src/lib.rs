#![no_std]

pub mod actor;
pub mod bitstream;
pub mod color;
pub mod command;
pub mod error;
pub mod order;
pub mod strip;
pub mod timing;

pub use actor::StripActor;
pub use bitstream::{Bitstream, BitstreamMode, Pulse, pulses};
pub use command::{StripChannel, StripCommand, StripReceiver, StripSender, TrySendError};
pub use error::Error;
pub use order::ChannelOrder;
pub use strip::{DEFAULT_BRIGHTNESS, NeoPixel, Pixel, PixelLayout, StripConfig, buffer_size};
pub use timing::{Protocol, Timing};

pub use color::{Color, Rgb, Rgbw};
pub use embassy_time::Duration;
