//! Square test tone from a 64-entry table.
//!
//! At 8 kHz one pass through the table is a 125 Hz square wave.

use alloc::vec;

use eb_ir::{ProcessError, SampleBuffer};

use crate::processor::{Processor, ProcessorInfo, ProcessorKind};

/// Rate the tone is generated for.
pub const SQUARE_SAMPLE_RATE: u32 = 8000;

const TABLE_LEN: usize = 64;
const AMPLITUDE: i16 = 10000;

/// One period: 32 high entries then 32 low.
pub static SQUARE_TABLE: [i16; TABLE_LEN] = build_table();

const fn build_table() -> [i16; TABLE_LEN] {
    let mut table = [-AMPLITUDE; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN / 2 {
        table[i] = AMPLITUDE;
        i += 1;
    }
    table
}

static INFO: ProcessorInfo = ProcessorInfo {
    name: "Square Wave",
    short_name: "square",
    kind: ProcessorKind::Generator,
};

#[derive(Debug, Default)]
pub struct Square {
    phase: usize,
}

impl Square {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table cursor as left by the last `process` call.
    pub fn phase(&self) -> usize {
        self.phase
    }
}

impl Processor for Square {
    fn info(&self) -> &ProcessorInfo {
        &INFO
    }

    fn process(&mut self, input: &SampleBuffer) -> Result<SampleBuffer, ProcessError> {
        let format = input.format().with_sample_rate(SQUARE_SAMPLE_RATE)?;
        let mut output = vec![0; input.len()];

        self.phase = 0;
        for frame in output.chunks_mut(2) {
            frame[0] = SQUARE_TABLE[self.phase];
            self.phase = (self.phase + 1) % TABLE_LEN;
        }
        SampleBuffer::new(format, output)
    }
}
