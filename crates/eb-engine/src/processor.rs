//! Processor trait shared by effects and generators.

use eb_ir::{ProcessError, SampleBuffer};

/// Whether a processor transforms its input or replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessorKind {
    /// Ignores input samples and synthesizes a waveform.
    Generator,
    /// Derives output from input samples.
    Effect,
}

/// Static metadata about a processor.
#[derive(Debug)]
pub struct ProcessorInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub kind: ProcessorKind,
}

/// A whole-buffer audio processor.
///
/// `process` reads `input` immutably and returns a new buffer of the same
/// length. The returned buffer's format is the one the output should be
/// played at; generators report their own sample rate there.
pub trait Processor: Send {
    fn info(&self) -> &ProcessorInfo;
    fn process(&mut self, input: &SampleBuffer) -> Result<SampleBuffer, ProcessError>;
}
