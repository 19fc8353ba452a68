//! Small scalar helpers shared by the generators and the session loop.

use libm::modff;

/// Fractional part of `x`, keeping the sign of `x` (C `modf` semantics).
///
/// For the non-negative phases used throughout the engine this is the wrap
/// into `[0, 1)`.
#[inline]
pub fn fract(x: f32) -> f32 {
    modff(x).0
}

/// Linear blend from `a` to `b` by `t`.
#[inline]
pub(crate) fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fract_wraps_phase() {
        assert_eq!(fract(0.25), 0.25);
        assert_eq!(fract(1.25), 0.25);
        assert_eq!(fract(3.0), 0.0);
    }

    #[test]
    fn test_fract_keeps_sign() {
        assert_eq!(fract(-1.25), -0.25);
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(-0.5, 0.5, 0.0), -0.5);
        assert_eq!(mix(-0.5, 0.5, 1.0), 0.5);
        assert_eq!(mix(-0.5, 0.5, 0.5), 0.0);
    }
}
