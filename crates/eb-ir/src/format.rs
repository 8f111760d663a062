//! Audio format description.

use core::fmt;

use crate::error::ProcessError;

/// The only supported sample width.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per encoded sample.
pub const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;

/// How individual samples are encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleEncoding {
    /// Two's complement linear PCM.
    SignedPcm,
    /// Offset-binary linear PCM (8-bit WAV).
    UnsignedPcm,
    /// IEEE float samples.
    Float,
}

impl fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleEncoding::SignedPcm => "signed PCM",
            SampleEncoding::UnsignedPcm => "unsigned PCM",
            SampleEncoding::Float => "float",
        })
    }
}

/// A validated PCM format: mono or stereo, 16-bit signed.
///
/// Fields are private so an `AudioFormat` can only exist once it has
/// passed [`AudioFormat::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioFormat {
    sample_rate: u32,
    channels: u16,
}

impl AudioFormat {
    /// Validate a raw format description.
    pub fn new(
        sample_rate: u32,
        channels: u16,
        bits_per_sample: u16,
        encoding: SampleEncoding,
    ) -> Result<Self, ProcessError> {
        let supported = matches!(channels, 1 | 2)
            && bits_per_sample == BITS_PER_SAMPLE
            && encoding == SampleEncoding::SignedPcm;
        if !supported {
            return Err(ProcessError::UnsupportedFormat {
                channels,
                bits_per_sample,
                encoding,
            });
        }
        if sample_rate == 0 {
            return Err(ProcessError::ZeroSampleRate);
        }
        if sample_rate
            .checked_mul((channels * BYTES_PER_SAMPLE) as u32)
            .is_none()
        {
            return Err(ProcessError::SampleRateTooHigh {
                sample_rate,
                channels,
            });
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Shorthand for 16-bit signed PCM.
    pub fn pcm16(sample_rate: u32, channels: u16) -> Result<Self, ProcessError> {
        Self::new(sample_rate, channels, BITS_PER_SAMPLE, SampleEncoding::SignedPcm)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    pub fn bits_per_sample(&self) -> u16 {
        BITS_PER_SAMPLE
    }

    pub fn encoding(&self) -> SampleEncoding {
        SampleEncoding::SignedPcm
    }

    /// Bytes per frame (`channels * 2`).
    pub fn block_align(&self) -> u16 {
        self.channels * BYTES_PER_SAMPLE
    }

    /// Bytes per second of audio. Cannot overflow for a validated format.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Same layout at a different rate. A zero rate is rejected.
    pub fn with_sample_rate(self, sample_rate: u32) -> Result<Self, ProcessError> {
        Self::pcm16(sample_rate, self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mono_and_stereo_pcm16() {
        let mono = AudioFormat::pcm16(44100, 1).unwrap();
        assert_eq!(mono.block_align(), 2);
        assert_eq!(mono.byte_rate(), 88200);

        let stereo = AudioFormat::pcm16(44100, 2).unwrap();
        assert!(stereo.is_stereo());
        assert_eq!(stereo.block_align(), 4);
        assert_eq!(stereo.byte_rate(), 176400);
    }

    #[test]
    fn rejects_other_channel_counts() {
        for channels in [0, 3, 6] {
            let err = AudioFormat::pcm16(44100, channels).unwrap_err();
            assert!(matches!(err, ProcessError::UnsupportedFormat { .. }));
        }
    }

    #[test]
    fn rejects_other_sample_widths_and_encodings() {
        assert!(AudioFormat::new(8000, 1, 8, SampleEncoding::UnsignedPcm).is_err());
        assert!(AudioFormat::new(8000, 2, 32, SampleEncoding::Float).is_err());
        assert!(AudioFormat::new(8000, 2, 16, SampleEncoding::UnsignedPcm).is_err());
    }

    #[test]
    fn rejects_zero_rate() {
        assert_eq!(AudioFormat::pcm16(0, 2), Err(ProcessError::ZeroSampleRate));
    }

    #[test]
    fn rejects_rates_whose_byte_rate_overflows() {
        assert_eq!(
            AudioFormat::pcm16(3_000_000_000, 2),
            Err(ProcessError::SampleRateTooHigh {
                sample_rate: 3_000_000_000,
                channels: 2
            })
        );
        assert!(AudioFormat::pcm16(1 << 30, 2).is_err());
        assert!(AudioFormat::pcm16(1 << 31, 1).is_err());

        let highest_stereo = AudioFormat::pcm16(u32::MAX / 4, 2).unwrap();
        assert_eq!(highest_stereo.byte_rate(), (u32::MAX / 4) * 4);
        assert!(AudioFormat::pcm16(u32::MAX / 2, 1).is_ok());
    }

    #[test]
    fn with_sample_rate_keeps_channels() {
        let f = AudioFormat::pcm16(44100, 1).unwrap().with_sample_rate(16000).unwrap();
        assert_eq!(f.sample_rate(), 16000);
        assert_eq!(f.channels(), 1);
    }
}
