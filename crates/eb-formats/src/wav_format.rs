//! WAV encoding and decoding for 16-bit PCM.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, SeekFrom, Write};
use std::path::Path;

use binrw::{binread, binrw, BinRead, BinWrite};
use eb_ir::{AudioFormat, SampleBuffer, SampleEncoding, BYTES_PER_SAMPLE};

use crate::FormatError;

/// Size of the canonical header written by [`write_wav`].
pub const HEADER_LEN: usize = 44;

const FMT_CHUNK_LEN: u32 = 16;
const WAVE_FORMAT_PCM: u16 = 1;
const WAVE_FORMAT_IEEE_FLOAT: u16 = 3;
const WAVE_FORMAT_EXTENSIBLE: u16 = 0xfffe;
/// `fmt ` size once the extensible block (cbSize .. SubFormat) is present.
const FMT_EXTENSIBLE_LEN: u32 = 40;

/// The canonical 44-byte PCM header: RIFF preamble, 16-byte `fmt ` chunk,
/// then the `data` chunk header.
#[binrw]
#[brw(little)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavHeader {
    /// `36 + data_size`
    #[brw(magic = b"RIFF")]
    pub chunk_size: u32,
    #[brw(magic = b"WAVEfmt ")]
    pub fmt_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    #[brw(magic = b"data")]
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `num_samples` interleaved samples of `format`.
    pub fn new(format: &AudioFormat, num_samples: usize) -> Result<Self, FormatError> {
        let data_size = num_samples
            .checked_mul(BYTES_PER_SAMPLE as usize)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| n.checked_add(36).is_some())
            .ok_or(FormatError::TooLarge { samples: num_samples })?;

        Ok(Self {
            chunk_size: 36 + data_size,
            fmt_size: FMT_CHUNK_LEN,
            audio_format: WAVE_FORMAT_PCM,
            num_channels: format.channels(),
            sample_rate: format.sample_rate(),
            byte_rate: format.byte_rate(),
            block_align: format.block_align(),
            bits_per_sample: format.bits_per_sample(),
            data_size,
        })
    }
}

// --- Writing ---

pub fn write_wav(w: &mut impl Write, buffer: &SampleBuffer) -> Result<(), FormatError> {
    let header = WavHeader::new(buffer.format(), buffer.len())?;

    let mut encoded = Cursor::new(Vec::with_capacity(HEADER_LEN));
    header.write(&mut encoded)?;
    w.write_all(encoded.get_ref())?;

    for sample in buffer.samples() {
        w.write_all(&sample.to_le_bytes())?;
    }
    Ok(())
}

pub fn samples_to_wav(buffer: &SampleBuffer) -> Result<Vec<u8>, FormatError> {
    let mut buf = Vec::with_capacity(HEADER_LEN + buffer.len() * 2);
    write_wav(&mut buf, buffer)?;
    Ok(buf)
}

/// Write `buffer` to a new file at `path`, replacing any existing file.
pub fn save_wav(path: impl AsRef<Path>, buffer: &SampleBuffer) -> Result<(), FormatError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| FormatError::OutputOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = BufWriter::new(file);
    write_wav(&mut w, buffer)?;
    w.flush()?;
    Ok(())
}

// --- Reading ---

/// Parse the canonical 44-byte header at the start of `data`.
///
/// Files with extra chunks before `data` fail with `InvalidHeader`; use
/// [`load_wav`] for those.
pub fn read_header(data: &[u8]) -> Result<WavHeader, FormatError> {
    Ok(WavHeader::read(&mut Cursor::new(data))?)
}

#[binread]
#[br(little, magic = b"RIFF")]
struct RiffPreamble {
    _size: u32,
    #[br(magic = b"WAVE")]
    _form: (),
}

#[binread]
#[br(little)]
struct ChunkHeader {
    id: [u8; 4],
    size: u32,
}

#[binread]
#[br(little)]
struct FmtChunk {
    audio_format: u16,
    num_channels: u16,
    sample_rate: u32,
    _byte_rate: u32,
    _block_align: u16,
    bits_per_sample: u16,
}

/// Tail of a `WAVE_FORMAT_EXTENSIBLE` fmt chunk. The first two bytes of
/// the SubFormat GUID carry the plain format tag.
#[binread]
#[br(little)]
struct FmtExtension {
    _cb_size: u16,
    _valid_bits: u16,
    _channel_mask: u32,
    sub_format: u16,
    _guid_tail: [u8; 14],
}

/// Load a WAV file from raw bytes.
///
/// Chunks other than `fmt ` and `data` are skipped. A data chunk that
/// claims more bytes than remain is truncated to what is present, and any
/// trailing partial frame is dropped.
pub fn load_wav(data: &[u8]) -> Result<SampleBuffer, FormatError> {
    let mut r = Cursor::new(data);
    RiffPreamble::read(&mut r)?;

    let mut fmt: Option<(FmtChunk, u16)> = None;
    let mut pcm: Option<&[u8]> = None;

    while (r.position() as usize) + 8 <= data.len() {
        let chunk = ChunkHeader::read(&mut r)?;
        let body_start = r.position() as usize;
        let body_end = body_start.saturating_add(chunk.size as usize);

        match &chunk.id {
            b"fmt " if chunk.size >= FMT_CHUNK_LEN => {
                let base = FmtChunk::read(&mut r)?;
                let tag = match base.audio_format {
                    WAVE_FORMAT_EXTENSIBLE if chunk.size >= FMT_EXTENSIBLE_LEN => {
                        FmtExtension::read(&mut r)?.sub_format
                    }
                    tag => tag,
                };
                fmt = Some((base, tag));
            }
            b"data" => pcm = Some(&data[body_start..body_end.min(data.len())]),
            _ => {}
        }

        // chunks are word aligned
        let next = body_end.saturating_add(body_end % 2);
        if next >= data.len() {
            break;
        }
        r.seek(SeekFrom::Start(next as u64))?;
    }

    let (fmt, tag) = fmt.ok_or(FormatError::InvalidHeader)?;
    let raw = pcm.ok_or(FormatError::InvalidHeader)?;
    let format = validate_fmt(&fmt, tag)?;

    let block_align = format.block_align() as usize;
    let whole = raw.len() - raw.len() % block_align;
    let samples = raw[..whole]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    Ok(SampleBuffer::new(format, samples)?)
}

/// `tag` is the effective format tag, already resolved for extensible files.
fn validate_fmt(fmt: &FmtChunk, tag: u16) -> Result<AudioFormat, FormatError> {
    let encoding = match (tag, fmt.bits_per_sample) {
        (WAVE_FORMAT_PCM, 8) => SampleEncoding::UnsignedPcm,
        (WAVE_FORMAT_PCM, _) => SampleEncoding::SignedPcm,
        (WAVE_FORMAT_IEEE_FLOAT, _) => SampleEncoding::Float,
        (tag, _) => return Err(FormatError::UnsupportedCodec { tag }),
    };
    Ok(AudioFormat::new(
        fmt.sample_rate,
        fmt.num_channels,
        fmt.bits_per_sample,
        encoding,
    )?)
}
