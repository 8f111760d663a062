//! Built-in processors and mode selection.

mod delay;
mod echo;
mod sine;
mod square;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

pub use delay::{Delay, DelayParams, DELAY_CAPACITY_FRAMES};
pub use echo::{Echo, EchoParams};
pub use sine::{Sine, SINE_SAMPLE_RATE};
pub use square::{Square, SQUARE_SAMPLE_RATE, SQUARE_TABLE};

use crate::processor::{Processor, ProcessorKind};

/// Parameters for every processor that takes any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub echo: EchoParams,
    pub delay: DelayParams,
}

/// One of the four processing modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Echo,
    Delay,
    Sine,
    Square,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Echo, Mode::Delay, Mode::Sine, Mode::Square];

    pub fn short_name(self) -> &'static str {
        match self {
            Mode::Echo => "echo",
            Mode::Delay => "delay",
            Mode::Sine => "sine",
            Mode::Square => "square",
        }
    }

    pub fn kind(self) -> ProcessorKind {
        match self {
            Mode::Echo | Mode::Delay => ProcessorKind::Effect,
            Mode::Sine | Mode::Square => ProcessorKind::Generator,
        }
    }

    /// Build the processor for this mode.
    pub fn processor(self, config: &EngineConfig) -> Box<dyn Processor> {
        match self {
            Mode::Echo => Box::new(Echo::new(config.echo)),
            Mode::Delay => Box::new(Delay::new(config.delay)),
            Mode::Sine => Box::new(Sine::new()),
            Mode::Square => Box::new(Square::new()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode `{0}` (expected echo, delay, sine or square)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMode(s.into()))
    }
}
