//! Interleaved 16-bit sample buffer.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::ProcessError;
use crate::format::AudioFormat;

/// Interleaved i16 samples plus the format they are meant to be played at.
///
/// Stereo data is stored `[l0, r0, l1, r1, ...]`. The length is always a
/// whole number of frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleBuffer {
    format: AudioFormat,
    samples: Vec<i16>,
}

impl SampleBuffer {
    /// Wrap existing samples, checking the length against the channel count.
    pub fn new(format: AudioFormat, samples: Vec<i16>) -> Result<Self, ProcessError> {
        let channels = format.channels();
        if samples.len() % channels as usize != 0 {
            return Err(ProcessError::MisalignedBuffer {
                len: samples.len(),
                channels,
            });
        }
        Ok(Self { format, samples })
    }

    /// A silent buffer of `len` samples.
    pub fn silence(format: AudioFormat, len: usize) -> Result<Self, ProcessError> {
        Self::new(format, vec![0; len])
    }

    pub fn format(&self) -> &AudioFormat {
        &self.format
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Total sample count across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.format.channels() as usize
    }
}
