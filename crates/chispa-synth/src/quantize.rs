//! Float to 16-bit PCM conversion.

use alloc::vec::Vec;
use libm::roundf;

/// Convert one sample: `round(s * 32768)` saturated to the `i16` range.
///
/// This is the only stage that bounds values. `1.0` maps to `32767`, NaN to
/// `0`, and infinities saturate.
///
/// ```rust
/// use chispa_synth::quantize_sample;
///
/// assert_eq!(quantize_sample(1.0), 32767);
/// assert_eq!(quantize_sample(-1.0), -32768);
/// assert_eq!(quantize_sample(0.0), 0);
/// ```
#[inline]
pub fn quantize_sample(sample: f32) -> i16 {
    // `as` saturates and maps NaN to 0
    roundf(sample * 32768.0).clamp(-32768.0, 32767.0) as i16
}

/// Convert a whole buffer with [`quantize_sample`].
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples.iter().copied().map(quantize_sample).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_full_scale() {
        assert_eq!(quantize_sample(1.0), 32767);
        assert_eq!(quantize_sample(-1.0), -32768);
        assert_eq!(quantize_sample(0.0), 0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(quantize_sample(0.5 / 32768.0), 1);
        assert_eq!(quantize_sample(-0.5 / 32768.0), -1);
        assert_eq!(quantize_sample(0.25 / 32768.0), 0);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(quantize_sample(2.5), 32767);
        assert_eq!(quantize_sample(-7.0), -32768);
        assert_eq!(quantize_sample(f32::INFINITY), 32767);
        assert_eq!(quantize_sample(f32::NEG_INFINITY), -32768);
    }

    #[test]
    fn test_nan_is_silence() {
        assert_eq!(quantize_sample(f32::NAN), 0);
    }

    #[test]
    fn test_buffer() {
        assert_eq!(quantize(&[0.5, -0.5, 1.5]), vec![16384, -16384, 32767]);
        assert!(quantize(&[]).is_empty());
    }
}
