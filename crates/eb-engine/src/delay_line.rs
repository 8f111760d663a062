//! Fixed-capacity ring buffer of past samples.
//!
//! The cursor lives outside the line so several channel lines can share
//! one write position. Per frame the caller reads the slot at the cursor
//! (the value written `capacity` frames ago), writes the new feedback
//! value into the same slot, then advances.

use alloc::vec;
use alloc::vec::Vec;

use eb_ir::ProcessError;

/// Capacity in frames for a delay of `delay_seconds` at `sample_rate`,
/// rounded down.
pub fn capacity_for(delay_seconds: f32, sample_rate: u32) -> Result<usize, ProcessError> {
    let frames = delay_seconds * sample_rate as f32;
    if frames.is_nan() || frames < 1.0 {
        return Err(ProcessError::InvalidDelayConfiguration {
            capacity: frames.max(0.0) as usize,
        });
    }
    Ok(frames as usize)
}

/// One channel's delay line, initially silent.
#[derive(Clone, Debug)]
pub struct DelayLine {
    slots: Vec<i16>,
}

impl DelayLine {
    pub fn new(capacity: usize) -> Result<Self, ProcessError> {
        if capacity == 0 {
            return Err(ProcessError::InvalidDelayConfiguration { capacity });
        }
        Ok(Self {
            slots: vec![0; capacity],
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Value stored at `cursor`.
    #[inline]
    pub fn read(&self, cursor: usize) -> i16 {
        self.slots[cursor]
    }

    /// Overwrite the slot at `cursor`.
    #[inline]
    pub fn write(&mut self, cursor: usize, value: i16) {
        self.slots[cursor] = value;
    }

    /// Next cursor position, wrapping at capacity.
    #[inline]
    pub fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.slots.len()
    }
}
