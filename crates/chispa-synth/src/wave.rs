//! Wave shapes and the per-session wave generator.
//!
//! Seven shapes are pure functions of phase; the three noise types keep state
//! between samples and live in [`crate::noise`]. [`WaveGenerator`] is the
//! closed set a session picks from, dispatched by `match`.

use core::f32::consts::PI;
use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use libm::{fabsf, sinf, tanf};

use crate::error::SynthError;
use crate::math::fract;
use crate::noise::{NoiseColor, NoiseGenerator};

/// Wave shape selector.
///
/// The names returned by [`name`](Self::name) are the exact, case-sensitive
/// spellings accepted by [`from_name`](Self::from_name) and used in preset
/// files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WaveType {
    /// Pure sine.
    #[default]
    Sine,
    /// Symmetric triangle starting at zero.
    Triangle,
    /// Rising ramp that wraps at mid-cycle.
    Sawtooth,
    /// 50% duty square.
    Square,
    /// Clipped tangent, buzzy with hard edges.
    Tangent,
    /// Sine with a quiet 20th harmonic on top.
    Whistle,
    /// Folded parabola, glassy and harsh.
    Breaker,
    /// Sample-and-hold white noise.
    WhiteNoise,
    /// Filtered noise with a 1/f spectrum.
    PinkNoise,
    /// Bounded random walk.
    BrownNoise,
}

impl WaveType {
    /// Every wave type, in selector order.
    pub const ALL: [WaveType; 10] = [
        WaveType::Sine,
        WaveType::Triangle,
        WaveType::Sawtooth,
        WaveType::Square,
        WaveType::Tangent,
        WaveType::Whistle,
        WaveType::Breaker,
        WaveType::WhiteNoise,
        WaveType::PinkNoise,
        WaveType::BrownNoise,
    ];

    /// Configuration name of this wave type.
    pub const fn name(self) -> &'static str {
        match self {
            WaveType::Sine => "sine",
            WaveType::Triangle => "triangle",
            WaveType::Sawtooth => "sawtooth",
            WaveType::Square => "square",
            WaveType::Tangent => "tangent",
            WaveType::Whistle => "whistle",
            WaveType::Breaker => "breaker",
            WaveType::WhiteNoise => "whitenoise",
            WaveType::PinkNoise => "pinknoise",
            WaveType::BrownNoise => "brownnoise",
        }
    }

    /// Looks up a wave type by its exact configuration name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chispa_synth::{SynthError, WaveType};
    ///
    /// assert_eq!(WaveType::from_name("pinknoise"), Ok(WaveType::PinkNoise));
    /// assert_eq!(
    ///     WaveType::from_name("Sine"),
    ///     Err(SynthError::UnknownWaveType("Sine".into()))
    /// );
    /// ```
    pub fn from_name(name: &str) -> Result<Self, SynthError> {
        Self::ALL
            .iter()
            .copied()
            .find(|wave| wave.name() == name)
            .ok_or_else(|| SynthError::UnknownWaveType(name.to_string()))
    }

    /// Whether this is one of the stateful noise types.
    pub const fn is_noise(self) -> bool {
        matches!(
            self,
            WaveType::WhiteNoise | WaveType::PinkNoise | WaveType::BrownNoise
        )
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveType {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WaveType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WaveType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}

/// `sin(2π·phase)`
#[inline]
pub fn sine(phase: f32) -> f32 {
    sinf(2.0 * PI * phase)
}

/// Triangle rising from 0 to 1 at a quarter cycle, down to -1 at three
/// quarters, back to 0.
#[inline]
pub fn triangle(phase: f32) -> f32 {
    if phase < 0.25 {
        4.0 * phase
    } else if phase < 0.75 {
        2.0 - 4.0 * phase
    } else {
        -4.0 + 4.0 * phase
    }
}

/// `1` for the first half cycle, `-1` for the second.
#[inline]
pub fn square(phase: f32) -> f32 {
    if phase < 0.5 { 1.0 } else { -1.0 }
}

/// Ramp from 0 to 1 over the first half cycle, then from -1 back to 0.
#[inline]
pub fn sawtooth(phase: f32) -> f32 {
    if phase < 0.5 {
        2.0 * phase
    } else {
        -2.0 + 2.0 * phase
    }
}

/// `0.3·tan(π·phase)` clipped to `[-2, 2]`.
#[inline]
pub fn tangent(phase: f32) -> f32 {
    (0.3 * tanf(PI * phase)).clamp(-2.0, 2.0)
}

/// Sine plus a quarter-level 20th harmonic.
#[inline]
pub fn whistle(phase: f32) -> f32 {
    0.75 * sinf(2.0 * PI * phase) + 0.25 * sinf(40.0 * PI * phase)
}

/// Phase offset of the breaker shape, √0.75 to three decimals.
const BREAKER_OFFSET: f32 = 0.866;

/// Folded parabola: `-1 + 2·|1 - 2q²|` with `q = fract(phase + √0.75)`.
#[inline]
pub fn breaker(phase: f32) -> f32 {
    let p = fract(phase + BREAKER_OFFSET);
    -1.0 + 2.0 * fabsf(1.0 - p * p * 2.0)
}

/// The wave generator owned by one synthesis session.
///
/// Pure shapes carry no data; noise variants own their random generator and
/// hold state. Created once per session and never shared.
///
/// # Example
///
/// ```rust
/// use chispa_synth::{WaveGenerator, WaveType};
///
/// let mut wave = WaveGenerator::new(WaveType::Square, false, 0);
/// assert_eq!(wave.sample(0.0, 0.0), 1.0);
/// assert_eq!(wave.sample(0.5, 0.0), -1.0);
/// ```
#[derive(Debug, Clone)]
pub enum WaveGenerator {
    /// See [`sine`].
    Sine,
    /// See [`triangle`].
    Triangle,
    /// See [`sawtooth`].
    Sawtooth,
    /// See [`square`].
    Square,
    /// See [`tangent`].
    Tangent,
    /// See [`whistle`].
    Whistle,
    /// See [`breaker`].
    Breaker,
    /// White, pink or brown noise.
    Noise(NoiseGenerator),
}

impl WaveGenerator {
    /// Create the generator for `wave_type`.
    ///
    /// `interpolate_noise` and `seed` are only used by the noise types.
    pub fn new(wave_type: WaveType, interpolate_noise: bool, seed: u64) -> Self {
        match wave_type {
            WaveType::Sine => WaveGenerator::Sine,
            WaveType::Triangle => WaveGenerator::Triangle,
            WaveType::Sawtooth => WaveGenerator::Sawtooth,
            WaveType::Square => WaveGenerator::Square,
            WaveType::Tangent => WaveGenerator::Tangent,
            WaveType::Whistle => WaveGenerator::Whistle,
            WaveType::Breaker => WaveGenerator::Breaker,
            WaveType::WhiteNoise => WaveGenerator::Noise(NoiseGenerator::new(
                NoiseColor::White,
                interpolate_noise,
                seed,
            )),
            WaveType::PinkNoise => WaveGenerator::Noise(NoiseGenerator::new(
                NoiseColor::Pink,
                interpolate_noise,
                seed,
            )),
            WaveType::BrownNoise => WaveGenerator::Noise(NoiseGenerator::new(
                NoiseColor::Brown,
                interpolate_noise,
                seed,
            )),
        }
    }

    /// The wave type this generator produces.
    pub fn wave_type(&self) -> WaveType {
        match self {
            WaveGenerator::Sine => WaveType::Sine,
            WaveGenerator::Triangle => WaveType::Triangle,
            WaveGenerator::Sawtooth => WaveType::Sawtooth,
            WaveGenerator::Square => WaveType::Square,
            WaveGenerator::Tangent => WaveType::Tangent,
            WaveGenerator::Whistle => WaveType::Whistle,
            WaveGenerator::Breaker => WaveType::Breaker,
            WaveGenerator::Noise(noise) => match noise.color() {
                NoiseColor::White => WaveType::WhiteNoise,
                NoiseColor::Pink => WaveType::PinkNoise,
                NoiseColor::Brown => WaveType::BrownNoise,
            },
        }
    }

    /// Sample at `phase ∈ [0, 1)`.
    ///
    /// `time` (seconds) is part of the generator contract but no current
    /// shape depends on it.
    #[inline]
    pub fn sample(&mut self, phase: f32, _time: f32) -> f32 {
        match self {
            WaveGenerator::Sine => sine(phase),
            WaveGenerator::Triangle => triangle(phase),
            WaveGenerator::Sawtooth => sawtooth(phase),
            WaveGenerator::Square => square(phase),
            WaveGenerator::Tangent => tangent(phase),
            WaveGenerator::Whistle => whistle(phase),
            WaveGenerator::Breaker => breaker(phase),
            WaveGenerator::Noise(noise) => noise.sample(phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for wave in WaveType::ALL {
            assert_eq!(WaveType::from_name(wave.name()), Ok(wave));
            assert_eq!(wave.name().parse::<WaveType>(), Ok(wave));
        }
    }

    #[test]
    fn test_name_lookup_is_case_sensitive() {
        assert!(WaveType::from_name("Square").is_err());
        assert!(WaveType::from_name("white_noise").is_err());
        assert!(WaveType::from_name("").is_err());
    }

    #[test]
    fn test_unknown_name_reports_error() {
        let err = WaveType::from_name("supersaw").unwrap_err();
        assert_eq!(err, SynthError::UnknownWaveType("supersaw".into()));
        assert_eq!(err.to_string(), "unrecognized wave type: 'supersaw'");
    }

    #[test]
    fn test_is_noise() {
        let noise: alloc::vec::Vec<_> = WaveType::ALL.into_iter().filter(|w| w.is_noise()).collect();
        assert_eq!(
            noise,
            [WaveType::WhiteNoise, WaveType::PinkNoise, WaveType::BrownNoise]
        );
    }

    #[test]
    fn test_sine_canonical_phases() {
        assert_eq!(sine(0.0), 0.0);
        assert!((sine(0.25) - 1.0).abs() < 1e-6);
        assert!((sine(0.75) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_square_canonical_phases() {
        assert_eq!(square(0.0), 1.0);
        assert_eq!(square(0.49), 1.0);
        assert_eq!(square(0.5), -1.0);
    }

    #[test]
    fn test_sawtooth_canonical_phases() {
        assert_eq!(sawtooth(0.0), 0.0);
        assert_eq!(sawtooth(0.25), 0.5);
        assert_eq!(sawtooth(0.5), -1.0);
        assert_eq!(sawtooth(0.75), -0.5);
    }

    #[test]
    fn test_triangle_canonical_phases() {
        assert_eq!(triangle(0.0), 0.0);
        assert_eq!(triangle(0.25), 1.0);
        assert_eq!(triangle(0.5), 0.0);
        assert_eq!(triangle(0.75), -1.0);
    }

    #[test]
    fn test_tangent_is_clipped() {
        assert_eq!(tangent(0.0), 0.0);
        // tan(π/2) blows up; the shape holds at the rail
        assert_eq!(tangent(0.4999), 2.0);
        assert_eq!(tangent(0.5001), -2.0);
    }

    #[test]
    fn test_whistle_range() {
        for i in 0..1000 {
            let s = whistle(i as f32 / 1000.0);
            assert!((-1.0..=1.0).contains(&s), "whistle out of range: {s}");
        }
    }

    #[test]
    fn test_breaker_range() {
        for i in 0..1000 {
            let s = breaker(i as f32 / 1000.0);
            assert!((-1.0..=1.0).contains(&s), "breaker out of range: {s}");
        }
        // q = 0.866 → 2q² ≈ 1.4999 → -1 + 2 · 0.4999
        assert!((breaker(0.0) - 0.0).abs() < 1e-3);
    }

    #[test]
    fn test_generator_matches_pure_shapes() {
        for wave in WaveType::ALL.into_iter().filter(|w| !w.is_noise()) {
            let mut generator = WaveGenerator::new(wave, false, 0);
            assert_eq!(generator.wave_type(), wave);
            for i in 0..64 {
                let phase = i as f32 / 64.0;
                let expected = match wave {
                    WaveType::Sine => sine(phase),
                    WaveType::Triangle => triangle(phase),
                    WaveType::Sawtooth => sawtooth(phase),
                    WaveType::Square => square(phase),
                    WaveType::Tangent => tangent(phase),
                    WaveType::Whistle => whistle(phase),
                    WaveType::Breaker => breaker(phase),
                    _ => unreachable!(),
                };
                assert_eq!(generator.sample(phase, 0.0), expected);
            }
        }
    }

    #[test]
    fn test_generator_noise_variants() {
        for wave in WaveType::ALL.into_iter().filter(|w| w.is_noise()) {
            let generator = WaveGenerator::new(wave, true, 1);
            assert_eq!(generator.wave_type(), wave);
            assert!(matches!(generator, WaveGenerator::Noise(_)));
        }
    }
}
