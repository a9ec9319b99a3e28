//! Strip commands and the queue that carries them.
//!
//! A bounded queue built on `critical-section` and `heapless::Deque`. Any
//! task or interrupt may enqueue commands; a single [`StripActor`] owning
//! the strip applies them in order.
//!
//! [`StripActor`]: crate::StripActor

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Color;
use crate::strip::Pixel;

/// Operation requested on a strip
#[derive(Debug, Clone, PartialEq)]
pub enum StripCommand {
    /// Set a pixel to a brightness scaled color and transmit
    SetColor { index: usize, color: Color },
    /// Re-render the last color at a pixel and transmit
    Redraw { index: usize },
    /// Change brightness, re-render pixel 0 and transmit
    SetBrightness(f32),
    /// Write a raw pixel value without transmitting
    Set { index: usize, value: Pixel },
    /// Write a raw value into every pixel without transmitting
    Fill(Pixel),
    /// Transmit the buffer as-is
    Write,
}

/// Error returned when the queue is full
#[derive(Debug, Clone, PartialEq)]
pub struct TrySendError(pub StripCommand);

/// Bounded command queue for a single strip
pub struct StripChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<StripCommand, SIZE>>>,
}

impl<const SIZE: usize> StripChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue
    ///
    /// Multiple senders can coexist.
    pub const fn sender(&self) -> StripSender<'_, SIZE> {
        StripSender { channel: self }
    }

    /// Get the receiving end, meant for the single strip owner
    pub const fn receiver(&self) -> StripReceiver<'_, SIZE> {
        StripReceiver { channel: self }
    }

    /// Enqueue a command
    ///
    /// Returns the command back if the queue is full.
    pub fn try_send(&self, command: StripCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Dequeue the oldest command, if any
    pub fn try_receive(&self) -> Option<StripCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for StripChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending handle for a [`StripChannel`]
#[derive(Clone, Copy)]
pub struct StripSender<'a, const SIZE: usize> {
    channel: &'a StripChannel<SIZE>,
}

impl<const SIZE: usize> StripSender<'_, SIZE> {
    pub fn try_send(&self, command: StripCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }

    pub fn set_color(&self, index: usize, color: impl Into<Color>) -> Result<(), TrySendError> {
        self.try_send(StripCommand::SetColor {
            index,
            color: color.into(),
        })
    }

    pub fn set_brightness(&self, brightness: f32) -> Result<(), TrySendError> {
        self.try_send(StripCommand::SetBrightness(brightness))
    }

    pub fn write(&self) -> Result<(), TrySendError> {
        self.try_send(StripCommand::Write)
    }
}

/// Receiving handle for a [`StripChannel`]
#[derive(Clone, Copy)]
pub struct StripReceiver<'a, const SIZE: usize> {
    channel: &'a StripChannel<SIZE>,
}

impl<const SIZE: usize> StripReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<StripCommand> {
        self.channel.try_receive()
    }
}
