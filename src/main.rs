//! echobox CLI — apply an echo/delay effect or generate a test tone.
//!
//! Usage:
//!   echobox input.wav --mode echo --output echoed.wav
//!   echobox --mode sine --samples 64000 --output tone.wav

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eb_engine::{Mode, ProcessorKind};
use eb_master::{AudioFormat, Config, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "echobox")]
#[command(about = "Echo/delay effects and test tones for 16-bit PCM WAV files")]
#[command(version)]
struct Cli {
    /// Input WAV file (16-bit mono or stereo)
    input: Option<PathBuf>,

    /// Processing mode: echo, delay, sine or square
    #[arg(short, long)]
    mode: Mode,

    /// Output WAV file (defaults to output.path from the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with effect parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of samples to generate when no input is given
    #[arg(long, default_value_t = 32000)]
    samples: usize,

    /// Sample rate of the silent input used when no input is given
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {:?}", path))?,
        None => Config::default(),
    };

    let mut session = match (&cli.input, cli.mode.kind()) {
        (Some(path), _) => Session::open(path).with_context(|| format!("loading {:?}", path))?,
        (None, ProcessorKind::Generator) => {
            let format = AudioFormat::pcm16(cli.sample_rate, 2)?;
            Session::silent(format, cli.samples)?
        }
        (None, ProcessorKind::Effect) => {
            anyhow::bail!("mode `{}` needs an input WAV file", cli.mode)
        }
    };
    session.set_config(config);

    let written = session
        .save(cli.mode, cli.output.as_deref())
        .with_context(|| format!("applying {}", cli.mode))?;
    tracing::info!("Done: {:?}", written);
    Ok(())
}
