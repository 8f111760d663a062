//! Feedback delay with a fixed frame count.
//!
//! Unlike [`Echo`](super::Echo) the line length does not follow the sample
//! rate: it is always `capacity_frames` long, 24000 by default.

use alloc::vec;

use eb_ir::{ProcessError, SampleBuffer};

use super::echo::feedback_mono;
use crate::delay_line::DelayLine;
use crate::processor::{Processor, ProcessorInfo, ProcessorKind};
use crate::saturate::{saturate, wrap_to_i16};

/// Default delay line length in frames.
pub const DELAY_CAPACITY_FRAMES: usize = 24000;

static INFO: ProcessorInfo = ProcessorInfo {
    name: "Delay",
    short_name: "delay",
    kind: ProcessorKind::Effect,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayParams {
    pub gain: f32,
    pub capacity_frames: usize,
}

impl Default for DelayParams {
    fn default() -> Self {
        Self {
            gain: 0.5,
            capacity_frames: DELAY_CAPACITY_FRAMES,
        }
    }
}

pub struct Delay {
    params: DelayParams,
}

impl Delay {
    pub fn new(params: DelayParams) -> Self {
        Self { params }
    }

    /// Line length used for any input, independent of its sample rate.
    pub fn capacity(&self) -> usize {
        self.params.capacity_frames
    }
}

impl Processor for Delay {
    fn info(&self) -> &ProcessorInfo {
        &INFO
    }

    fn process(&mut self, input: &SampleBuffer) -> Result<SampleBuffer, ProcessError> {
        let format = *input.format();
        let mut line = DelayLine::new(self.params.capacity_frames)?;
        let mut output = vec![0; input.len()];

        if format.is_stereo() {
            delay_stereo(&mut line, input.samples(), &mut output, self.params.gain);
        } else {
            feedback_mono(&mut line, input.samples(), &mut output, self.params.gain);
        }
        SampleBuffer::new(format, output)
    }
}

/// Left channel only. The stored feedback is narrowed without clamping;
/// right is passed through and has no line of its own.
fn delay_stereo(left: &mut DelayLine, input: &[i16], output: &mut [i16], gain: f32) {
    let mut cursor = 0;
    for (x, y) in input.chunks_exact(2).zip(output.chunks_exact_mut(2)) {
        let delayed_l = left.read(cursor) as f32;
        let in_l = x[0] as f32;

        left.write(cursor, wrap_to_i16(in_l + delayed_l * gain));
        y[0] = saturate(in_l + delayed_l);
        y[1] = saturate(x[1] as f32);
        cursor = left.advance(cursor);
    }
}
