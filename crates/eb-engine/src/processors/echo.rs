//! Feedback echo with a delay time in seconds.

use alloc::vec;

use eb_ir::{ProcessError, SampleBuffer};

use crate::delay_line::{capacity_for, DelayLine};
use crate::processor::{Processor, ProcessorInfo, ProcessorKind};
use crate::saturate::saturate;

static INFO: ProcessorInfo = ProcessorInfo {
    name: "Echo",
    short_name: "echo",
    kind: ProcessorKind::Effect,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EchoParams {
    /// Feedback gain applied to the delayed signal.
    pub gain: f32,
    /// Delay time; capacity is `delay_seconds * sample_rate` frames.
    pub delay_seconds: f32,
}

impl Default for EchoParams {
    fn default() -> Self {
        Self {
            gain: 0.5,
            delay_seconds: 0.5,
        }
    }
}

/// Echo on the left channel (or the only channel). Stereo right is passed
/// through untouched.
pub struct Echo {
    params: EchoParams,
}

impl Echo {
    pub fn new(params: EchoParams) -> Self {
        Self { params }
    }
}

impl Processor for Echo {
    fn info(&self) -> &ProcessorInfo {
        &INFO
    }

    fn process(&mut self, input: &SampleBuffer) -> Result<SampleBuffer, ProcessError> {
        let format = *input.format();
        let capacity = capacity_for(self.params.delay_seconds, format.sample_rate())?;
        let mut output = vec![0; input.len()];

        if format.is_stereo() {
            echo_stereo(input.samples(), &mut output, capacity, self.params.gain)?;
        } else {
            let mut line = DelayLine::new(capacity)?;
            feedback_mono(&mut line, input.samples(), &mut output, self.params.gain);
        }
        SampleBuffer::new(format, output)
    }
}

/// Mono feedback loop shared by echo and delay.
pub(crate) fn feedback_mono(line: &mut DelayLine, input: &[i16], output: &mut [i16], gain: f32) {
    let mut cursor = 0;
    for (&x, y) in input.iter().zip(output.iter_mut()) {
        let delayed = line.read(cursor) as f32;
        let x = x as f32;
        *y = saturate(x + delayed);
        line.write(cursor, saturate(x + delayed * gain));
        cursor = line.advance(cursor);
    }
}

fn echo_stereo(
    input: &[i16],
    output: &mut [i16],
    capacity: usize,
    gain: f32,
) -> Result<(), ProcessError> {
    let mut left = DelayLine::new(capacity)?;
    // filled with the dry right signal, never mixed back in
    let mut right = DelayLine::new(capacity)?;
    let mut cursor = 0;

    for (x, y) in input.chunks_exact(2).zip(output.chunks_exact_mut(2)) {
        let delayed_l = left.read(cursor) as f32;
        let in_l = x[0] as f32;
        let in_r = x[1] as f32;

        y[0] = saturate(in_l + delayed_l);
        y[1] = saturate(in_r);

        left.write(cursor, saturate(in_l + delayed_l * gain));
        right.write(cursor, saturate(in_r));
        cursor = left.advance(cursor);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use eb_ir::AudioFormat;

    fn mono(rate: u32, samples: Vec<i16>) -> SampleBuffer {
        SampleBuffer::new(AudioFormat::pcm16(rate, 1).unwrap(), samples).unwrap()
    }

    fn stereo(rate: u32, samples: Vec<i16>) -> SampleBuffer {
        SampleBuffer::new(AudioFormat::pcm16(rate, 2).unwrap(), samples).unwrap()
    }

    /// Capacity 2 at 4 Hz with the default half-second delay.
    fn short_echo() -> Echo {
        Echo::new(EchoParams::default())
    }

    #[test]
    fn impulse_feedback_timing() {
        let mut input = vec![0i16; 10];
        input[0] = 1000;
        let out = short_echo().process(&mono(4, input)).unwrap();
        assert_eq!(out.samples(), &[1000, 0, 1000, 0, 500, 0, 250, 0, 125, 0]);
    }

    #[test]
    fn warm_up_passes_input_through() {
        let input: Vec<i16> = (0..22050).map(|i| ((i * 7) % 2000) as i16 - 1000).collect();
        let out = short_echo().process(&mono(44100, input.clone())).unwrap();
        assert_eq!(out.samples(), &input[..]);
    }

    #[test]
    fn warm_up_holds_for_any_gain() {
        for gain in [0.0, 0.25, 1.0] {
            let mut echo = Echo::new(EchoParams {
                gain,
                delay_seconds: 1.0,
            });
            let input = vec![-3000i16; 8];
            let out = echo.process(&mono(8, input.clone())).unwrap();
            assert_eq!(out.samples(), &input[..]);
        }
    }

    #[test]
    fn output_saturates() {
        let out = short_echo()
            .process(&mono(4, vec![30000, 0, 30000, 0, -30000, 0, -30000]))
            .unwrap();
        assert_eq!(out.samples()[2], i16::MAX);
        // slot 0 holds saturate(30000 + 30000 * 0.5) = 32767
        assert_eq!(out.samples()[4], 2767);
        assert_eq!(out.samples()[6], i16::MIN);
    }

    #[test]
    fn stereo_echoes_left_only() {
        // 4 Hz, capacity 2 frames
        let input = vec![1000, 2000, 0, 0, 0, 0, 0, 0, 0, 0];
        let out = short_echo().process(&stereo(4, input)).unwrap();
        assert_eq!(out.samples(), &[1000, 2000, 0, 0, 1000, 0, 0, 0, 500, 0]);
    }

    #[test]
    fn output_keeps_length_and_format() {
        let input = stereo(44100, vec![5; 64]);
        let out = short_echo().process(&input).unwrap();
        assert_eq!(out.len(), 64);
        assert_eq!(out.format(), input.format());
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut echo = Echo::new(EchoParams {
            gain: 0.5,
            delay_seconds: 0.1,
        });
        assert!(matches!(
            echo.process(&mono(4, vec![1, 2, 3])),
            Err(ProcessError::InvalidDelayConfiguration { capacity: 0 })
        ));
    }
}
