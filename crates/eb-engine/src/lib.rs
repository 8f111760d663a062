//! Sample processing engine for echobox.
//!
//! Delay-line effects (echo, delay) and test-tone generators (sine,
//! square) over whole in-memory [`SampleBuffer`](eb_ir::SampleBuffer)s.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod delay_line;
mod processor;
pub mod processors;
mod saturate;

pub use delay_line::{capacity_for, DelayLine};
pub use processor::{Processor, ProcessorInfo, ProcessorKind};
pub use processors::{
    Delay, DelayParams, Echo, EchoParams, EngineConfig, Mode, Sine, Square, UnknownMode,
};
pub use saturate::{saturate, wrap_to_i16};
