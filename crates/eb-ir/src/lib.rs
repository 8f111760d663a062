//! Core data model for echobox.
//!
//! Every stage of the pipeline exchanges [`SampleBuffer`]s: interleaved
//! 16-bit PCM together with the [`AudioFormat`] it is meant to be played at.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod format;
mod sample_buffer;

pub use error::ProcessError;
pub use format::{AudioFormat, SampleEncoding, BITS_PER_SAMPLE, BYTES_PER_SAMPLE};
pub use sample_buffer::SampleBuffer;
