//! Errors raised while validating or processing audio.

use crate::format::SampleEncoding;

/// Error type for format validation and sample processing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    /// Not mono/stereo 16-bit signed PCM.
    #[error(
        "unsupported audio format: {channels} channel(s), {bits_per_sample}-bit {encoding} \
         (expected 16-bit signed mono or stereo)"
    )]
    UnsupportedFormat {
        channels: u16,
        bits_per_sample: u16,
        encoding: SampleEncoding,
    },
    /// Sample rate of 0 Hz.
    #[error("sample rate must be positive")]
    ZeroSampleRate,
    /// Byte rate of the format does not fit in 32 bits.
    #[error("sample rate {sample_rate} Hz is too high for {channels} channel(s)")]
    SampleRateTooHigh { sample_rate: u32, channels: u16 },
    /// Delay line would hold no samples.
    #[error("invalid delay configuration: delay line capacity {capacity} (must be at least 1)")]
    InvalidDelayConfiguration { capacity: usize },
    /// Sample count is not a whole number of frames.
    #[error("buffer of {len} samples is not a whole number of {channels}-channel frames")]
    MisalignedBuffer { len: usize, channels: u16 },
}
