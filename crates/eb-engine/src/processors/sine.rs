//! Sine test tone.
//!
//! Generated in closed form from the sample index: the left channel of the
//! frame at element index `i` is `10000 * sin(2π * 0.25 * i / 8)`, which
//! at 16 kHz is a 1 kHz tone.

use alloc::vec;
use core::f64::consts::TAU;

use eb_ir::{ProcessError, SampleBuffer};

use crate::processor::{Processor, ProcessorInfo, ProcessorKind};
use crate::saturate::saturate;

/// Rate the tone is generated for.
pub const SINE_SAMPLE_RATE: u32 = 16000;

const AMPLITUDE: f64 = 10000.0;
const LOOP_LENGTH: usize = 8;
const INDEX_SCALE: f64 = 0.25;

static INFO: ProcessorInfo = ProcessorInfo {
    name: "Sine Wave",
    short_name: "sine",
    kind: ProcessorKind::Generator,
};

#[derive(Debug, Default)]
pub struct Sine {
    phase: usize,
}

impl Sine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame counter modulo 8, as left by the last `process` call.
    pub fn phase(&self) -> usize {
        self.phase
    }
}

fn sample_at(index: usize) -> i16 {
    let v = AMPLITUDE * libm::sin(TAU * (INDEX_SCALE * index as f64) / LOOP_LENGTH as f64);
    saturate(v as f32)
}

impl Processor for Sine {
    fn info(&self) -> &ProcessorInfo {
        &INFO
    }

    fn process(&mut self, input: &SampleBuffer) -> Result<SampleBuffer, ProcessError> {
        let format = input.format().with_sample_rate(SINE_SAMPLE_RATE)?;
        let mut output = vec![0; input.len()];

        self.phase = 0;
        for (k, frame) in output.chunks_mut(2).enumerate() {
            frame[0] = sample_at(2 * k);
            self.phase = (self.phase + 1) % LOOP_LENGTH;
        }
        SampleBuffer::new(format, output)
    }
}
