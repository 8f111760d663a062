//! WAV container support for echobox.
//!
//! Writes canonical 44-byte-header PCM files and reads any RIFF/WAVE file
//! whose format passes [`AudioFormat`](eb_ir::AudioFormat) validation.

mod wav_format;

use std::io;
use std::path::PathBuf;

use eb_ir::ProcessError;

pub use wav_format::{
    load_wav, read_header, samples_to_wav, save_wav, write_wav, WavHeader, HEADER_LEN,
};

/// Error type for WAV encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Missing or malformed RIFF/WAVE structure
    #[error("invalid WAV header")]
    InvalidHeader,
    /// Input ended inside a header or chunk
    #[error("unexpected end of WAV data")]
    UnexpectedEof,
    /// fmt chunk describes a compressed codec
    #[error("unsupported WAV codec tag {tag:#06x}")]
    UnsupportedCodec { tag: u16 },
    /// Parsed format is not mono/stereo 16-bit signed PCM
    #[error(transparent)]
    Unsupported(#[from] ProcessError),
    /// Data chunk would not fit a 32-bit RIFF size field
    #[error("{samples} samples do not fit in a WAV data chunk")]
    TooLarge { samples: usize },
    /// Destination file could not be created
    #[error("failed to open output file {}", path.display())]
    OutputOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("WAV codec error: {0}")]
    Codec(binrw::Error),
}

impl From<binrw::Error> for FormatError {
    fn from(err: binrw::Error) -> Self {
        match err {
            binrw::Error::Backtrace(bt) => FormatError::from(*bt.error),
            binrw::Error::BadMagic { .. } => FormatError::InvalidHeader,
            binrw::Error::Io(io) if io.kind() == io::ErrorKind::UnexpectedEof => {
                FormatError::UnexpectedEof
            }
            binrw::Error::Io(io) => FormatError::Io(io),
            other => FormatError::Codec(other),
        }
    }
}
