//! Single-owner front end for a strip
//!
//! The strip itself is not safe to drive from several tasks at once. The
//! actor owns the receiving end of a [`StripChannel`](crate::StripChannel)
//! and applies queued commands one after another, awaiting each transmit
//! before starting the next command.

use crate::bitstream::Bitstream;
use crate::command::{StripCommand, StripReceiver};
use crate::error::Error;
use crate::strip::NeoPixel;

pub struct StripActor<'a, const SIZE: usize> {
    commands: StripReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> StripActor<'a, SIZE> {
    pub const fn new(commands: StripReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Apply every queued command to `strip`
    ///
    /// Returns the number of commands applied. Stops at the first failing
    /// command; that command is consumed and the rest stay queued.
    pub async fn process_pending<L: Bitstream, const BUF: usize>(
        &mut self,
        strip: &mut NeoPixel<'_, L, BUF>,
    ) -> Result<usize, Error<L::Error>> {
        let mut processed = 0;
        while let Some(command) = self.commands.try_receive() {
            Self::apply(strip, command).await?;
            processed += 1;
        }
        Ok(processed)
    }

    async fn apply<L: Bitstream, const BUF: usize>(
        strip: &mut NeoPixel<'_, L, BUF>,
        command: StripCommand,
    ) -> Result<(), Error<L::Error>> {
        match command {
            StripCommand::SetColor { index, color } => strip.set_color(index, color).await,
            StripCommand::Redraw { index } => strip.redraw(index).await,
            StripCommand::SetBrightness(brightness) => strip.set_brightness(brightness).await,
            StripCommand::Set { index, value } => strip.set(index, &value),
            StripCommand::Fill(value) => strip.fill(&value),
            StripCommand::Write => strip.write().await,
        }
    }
}
