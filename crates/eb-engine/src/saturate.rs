//! Float to i16 narrowing.

/// Clamp to the i16 range and truncate toward zero. NaN becomes 0.
#[inline]
pub fn saturate(v: f32) -> i16 {
    v.clamp(-32768.0, 32767.0) as i16
}

/// Truncate toward zero and keep the low 16 bits.
///
/// Out-of-range values wrap instead of clamping.
#[inline]
pub fn wrap_to_i16(v: f32) -> i16 {
    v as i32 as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_range() {
        assert_eq!(saturate(40000.0), i16::MAX);
        assert_eq!(saturate(-40000.0), i16::MIN);
        assert_eq!(saturate(f32::INFINITY), i16::MAX);
        assert_eq!(saturate(f32::NEG_INFINITY), i16::MIN);
        assert_eq!(saturate(f32::NAN), 0);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(saturate(1.9), 1);
        assert_eq!(saturate(-1.9), -1);
        assert_eq!(saturate(32766.99), 32766);
    }

    #[test]
    fn idempotent_on_every_i16() {
        for v in i16::MIN..=i16::MAX {
            assert_eq!(saturate(v as f32), v);
        }
    }

    #[test]
    fn wrap_keeps_low_bits() {
        assert_eq!(wrap_to_i16(1000.7), 1000);
        assert_eq!(wrap_to_i16(32768.0), i16::MIN);
        assert_eq!(wrap_to_i16(49150.0), (49150i32 - 65536) as i16);
        assert_eq!(wrap_to_i16(-32769.0), i16::MAX);
    }
}
