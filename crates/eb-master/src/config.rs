//! TOML configuration for effect parameters and output location.
//!
//! Every key is optional; missing keys fall back to the built-in defaults
//! (gain 0.5, 0.5 s echo, 24000-frame delay, `output.wav`).
//!
//! ```toml
//! [echo]
//! gain = 0.4
//! delay_seconds = 0.25
//!
//! [delay]
//! capacity_frames = 12000
//!
//! [output]
//! path = "echoed.wav"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use eb_engine::{DelayParams, EchoParams, EngineConfig};
use serde::Deserialize;

use crate::SessionError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub echo: EchoSection,
    pub delay: DelaySection,
    pub output: OutputSection,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EchoSection {
    pub gain: f32,
    pub delay_seconds: f32,
}

impl Default for EchoSection {
    fn default() -> Self {
        let p = EchoParams::default();
        Self {
            gain: p.gain,
            delay_seconds: p.delay_seconds,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DelaySection {
    pub gain: f32,
    pub capacity_frames: usize,
}

impl Default for DelaySection {
    fn default() -> Self {
        let p = DelayParams::default();
        Self {
            gain: p.gain,
            capacity_frames: p.capacity_frames,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub path: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.wav"),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, SessionError> {
        let config: Config = toml::from_str(s)?;
        config.check();
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {:?}", path);
        Self::from_toml_str(&text)
    }

    /// Processor parameters for the engine.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            echo: EchoParams {
                gain: self.echo.gain,
                delay_seconds: self.echo.delay_seconds,
            },
            delay: DelayParams {
                gain: self.delay.gain,
                capacity_frames: self.delay.capacity_frames,
            },
        }
    }

    fn check(&self) {
        for (name, gain) in [("echo", self.echo.gain), ("delay", self.delay.gain)] {
            if !(0.0..=1.0).contains(&gain) {
                tracing::warn!("{} gain {} is outside 0..=1; feedback will not decay", name, gain);
            }
        }
    }
}
