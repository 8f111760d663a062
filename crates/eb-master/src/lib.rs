//! Headless controller for echobox.
//!
//! Provides a unified API for loading input audio, applying a processing
//! mode and writing the result, so the CLI stays a thin shell.

mod config;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use eb_engine::Mode;

pub use config::{Config, DelaySection, EchoSection, OutputSection};
pub use eb_formats::FormatError;
pub use eb_ir::{AudioFormat, ProcessError, SampleBuffer};

/// Error type for session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Owns one input buffer and the configuration used to process it.
pub struct Session {
    input: SampleBuffer,
    config: Config,
}

impl Session {
    pub fn new(input: SampleBuffer) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: SampleBuffer, config: Config) -> Self {
        Self { input, config }
    }

    /// Decode WAV bytes as the input.
    pub fn from_wav(data: &[u8]) -> Result<Self, SessionError> {
        let input = eb_formats::load_wav(data)?;
        tracing::info!(
            "Loaded {} samples, {} channel(s) at {} Hz",
            input.len(),
            input.format().channels(),
            input.format().sample_rate()
        );
        Ok(Self::new(input))
    }

    /// Read and decode a WAV file as the input.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Read {} bytes from {:?}", data.len(), path);
        Self::from_wav(&data)
    }

    /// A silent input of `len` samples, for generator-only runs.
    pub fn silent(format: AudioFormat, len: usize) -> Result<Self, SessionError> {
        Ok(Self::new(SampleBuffer::silence(format, len)?))
    }

    pub fn input(&self) -> &SampleBuffer {
        &self.input
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Run `mode` over the input. The input is left untouched.
    pub fn apply(&self, mode: Mode) -> Result<SampleBuffer, SessionError> {
        let mut processor = mode.processor(&self.config.engine());
        tracing::info!(
            "Applying {} to {} channel(s) at {} Hz",
            processor.info().name,
            self.input.format().channels(),
            self.input.format().sample_rate()
        );

        let output = processor.process(&self.input)?;
        if output.format().sample_rate() != self.input.format().sample_rate() {
            tracing::info!("Output sample rate is {} Hz", output.format().sample_rate());
        }
        tracing::debug!("Produced {} frames", output.frames());
        Ok(output)
    }

    /// Apply `mode` and encode the result as WAV bytes.
    pub fn render_to_wav(&self, mode: Mode) -> Result<Vec<u8>, SessionError> {
        let output = self.apply(mode)?;
        Ok(eb_formats::samples_to_wav(&output)?)
    }

    /// Apply `mode` and write the result to `path`, or to the configured
    /// output path when `path` is `None`. Returns the path written.
    pub fn save(&self, mode: Mode, path: Option<&Path>) -> Result<PathBuf, SessionError> {
        let path = path.unwrap_or(self.config.output.path.as_path()).to_path_buf();
        let output = self.apply(mode)?;
        eb_formats::save_wav(&path, &output)?;
        tracing::info!("Wrote {} samples to {:?}", output.len(), path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_session(samples: Vec<i16>) -> Session {
        let fmt = AudioFormat::pcm16(44100, 2).unwrap();
        Session::new(SampleBuffer::new(fmt, samples).unwrap())
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let session = stereo_session(vec![100; 32]);
        let out = session.apply(Mode::Square).unwrap();
        assert_eq!(session.input().samples(), &[100; 32]);
        assert_eq!(out.samples()[0], 10000);
    }

    #[test]
    fn generators_report_their_rate() {
        let session = Session::silent(AudioFormat::pcm16(44100, 2).unwrap(), 16).unwrap();
        assert_eq!(session.apply(Mode::Sine).unwrap().format().sample_rate(), 16000);
        assert_eq!(session.apply(Mode::Square).unwrap().format().sample_rate(), 8000);
        assert_eq!(session.apply(Mode::Echo).unwrap().format().sample_rate(), 44100);
    }

    #[test]
    fn config_reaches_the_engine() {
        let mut session = Session::new(
            SampleBuffer::new(AudioFormat::pcm16(4, 1).unwrap(), vec![1000, 0, 0, 0, 0]).unwrap(),
        );
        session.set_config(Config::from_toml_str("[echo]\ndelay_seconds = 0.25\n").unwrap());
        // one-frame line
        assert_eq!(session.apply(Mode::Echo).unwrap().samples(), &[1000, 1000, 500, 250, 125]);
    }

    #[test]
    fn invalid_delay_is_a_process_error() {
        let mut session = stereo_session(vec![0; 4]);
        session.set_config(Config::from_toml_str("[echo]\ndelay_seconds = 0.0\n").unwrap());
        assert!(matches!(
            session.apply(Mode::Echo),
            Err(SessionError::Process(ProcessError::InvalidDelayConfiguration { .. }))
        ));
    }

    #[test]
    fn unsupported_wav_rejected_before_processing() {
        let mut wav = eb_formats::samples_to_wav(
            &SampleBuffer::new(AudioFormat::pcm16(8000, 1).unwrap(), vec![0; 4]).unwrap(),
        )
        .unwrap();
        // patch bits_per_sample to 8
        wav[34] = 8;
        assert!(matches!(
            Session::from_wav(&wav),
            Err(SessionError::Format(FormatError::Unsupported(_)))
        ));
    }

    #[test]
    fn overflowing_sample_rate_rejected_on_load() {
        let mut wav = eb_formats::samples_to_wav(
            &SampleBuffer::new(AudioFormat::pcm16(8000, 2).unwrap(), vec![0; 4]).unwrap(),
        )
        .unwrap();
        wav[24..28].copy_from_slice(&3_000_000_000u32.to_le_bytes());
        assert!(matches!(
            Session::from_wav(&wav),
            Err(SessionError::Format(FormatError::Unsupported(
                ProcessError::SampleRateTooHigh { .. }
            )))
        ));
    }

    #[test]
    fn save_defaults_to_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("configured.wav");
        let mut session = stereo_session(vec![0; 8]);
        let mut config = Config::default();
        config.output.path = target.clone();
        session.set_config(config);

        let written = session.save(Mode::Delay, None).unwrap();
        assert_eq!(written, target);
        assert!(target.exists());
    }

    #[test]
    fn render_to_wav_round_trips() {
        let session = stereo_session((0..20).collect());
        let wav = session.render_to_wav(Mode::Echo).unwrap();
        let decoded = eb_formats::load_wav(&wav).unwrap();
        assert_eq!(decoded, session.apply(Mode::Echo).unwrap());
    }
}
