#![allow(dead_code)]

use myrtio_neopixel::{Bitstream, BitstreamMode, Timing};

/// Line failure reported by [`RecordingLine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBusy;

/// Transmitted frame as seen by the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub mode: BitstreamMode,
    pub timing: Timing,
    pub data: Vec<u8>,
}

/// Line that records every bitstream instead of emitting it
#[derive(Debug, Default)]
pub struct RecordingLine {
    pub frames: Vec<Frame>,
    pub busy: bool,
}

impl RecordingLine {
    pub fn busy() -> Self {
        Self {
            frames: Vec::new(),
            busy: true,
        }
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("no frame was transmitted")
    }
}

impl Bitstream for RecordingLine {
    type Error = LineBusy;

    async fn bitstream(
        &mut self,
        mode: BitstreamMode,
        timing: &Timing,
        data: &[u8],
    ) -> Result<(), LineBusy> {
        if self.busy {
            return Err(LineBusy);
        }
        self.frames.push(Frame {
            mode,
            timing: *timing,
            data: data.to_vec(),
        });
        Ok(())
    }
}
