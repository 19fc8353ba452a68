//! Authored sound parameters and the envelope/frequency model derived from them.
//!
//! [`SynthParams`] is what a designer edits: plain numbers in the units people
//! think in (seconds, Hz, percent, milliseconds). Nothing is validated or
//! normalized on construction.
//!
//! [`ResolvedParams`] is the read-only view a synthesis session works from. It
//! is created by [`SynthParams::resolve`], holds its own copy of the authored
//! values plus the percentage fields scaled to `0..=1`, and evaluates the
//! amplitude envelope and the instantaneous frequency at any point in time.
//! Resolving never touches the caller's [`SynthParams`].

use core::f32::consts::PI;
use libm::{ceil, cosf, fabs, round, sinf};

use crate::math::fract;
use crate::wave::WaveType;

/// Default output rate in Hz (the classic 22.05 kHz arcade rate).
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

/// Raw authored parameters of one sound effect.
///
/// All fields are independent; any combination is accepted. The sound lasts
/// `attack + sustain + decay` seconds.
///
/// # Example
///
/// ```rust
/// use chispa_synth::{SynthParams, WaveType};
///
/// let laser = SynthParams {
///     frequency: 1200.0,
///     frequency_sweep: -900.0,
///     sustain: 0.05,
///     decay: 0.18,
///     wave_type: WaveType::Sawtooth,
///     ..SynthParams::default()
/// };
/// assert!((laser.duration() - 0.23).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase", deny_unknown_fields)
)]
pub struct SynthParams {
    /// Attack segment length in seconds (linear ramp from 0 to 1).
    pub attack: f32,
    /// Sustain segment length in seconds.
    pub sustain: f32,
    /// Decay segment length in seconds (linear ramp from 1 to 0).
    pub decay: f32,

    /// Times per second the frequency sweep restarts from its base value.
    /// Zero means one sweep over the whole sound.
    pub repeat_frequency: f32,

    /// Base frequency in Hz.
    pub frequency: f32,
    /// Linear sweep term in Hz, reached at the end of each repetition.
    pub frequency_sweep: f32,
    /// Quadratic sweep term in Hz, reached at the end of each repetition.
    pub frequency_delta_sweep: f32,

    /// Point within a repetition (percent) after which jump 1 applies.
    pub frequency_jump1_onset: f32,
    /// Frequency increase of jump 1 in percent.
    pub frequency_jump1_amount: f32,
    /// Point within a repetition (percent) after which jump 2 applies.
    pub frequency_jump2_onset: f32,
    /// Frequency increase of jump 2 in percent.
    pub frequency_jump2_amount: f32,

    /// Vibrato rate in Hz.
    pub vibrato_frequency: f32,
    /// Vibrato depth in Hz.
    pub vibrato_depth: f32,
    /// Tremolo rate in Hz.
    pub tremolo_frequency: f32,
    /// Tremolo depth in percent.
    pub tremolo_depth: f32,
    /// Extra level at the start of the sustain segment, in percent.
    pub sustain_punch: f32,

    /// Flanger delay in milliseconds.
    pub flanger_offset: f32,
    /// Flanger delay added linearly over the sound, in milliseconds.
    pub flanger_offset_sweep: f32,

    /// Rescale so the highest sample reaches `amplification`.
    pub normalization: bool,
    /// Linear output gain.
    pub amplification: f32,

    /// Number of extra harmonic partials, clamped to `0..=5` when rendering.
    pub harmonics: i32,
    /// Geometric falloff between partials, clamped to `0..=1` when rendering.
    pub harmonics_falloff: f32,

    /// Output rate in Hz.
    pub samples_per_second: u32,
    /// Wave shape.
    #[cfg_attr(feature = "serde", serde(rename = "wave"))]
    pub wave_type: WaveType,
    /// Blend between successive noise values instead of holding them.
    /// Only affects the noise wave types.
    pub interpolate_noise: bool,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            attack: 0.0,
            sustain: 0.0,
            decay: 0.0,
            repeat_frequency: 0.0,
            frequency: 0.0,
            frequency_sweep: 0.0,
            frequency_delta_sweep: 0.0,
            frequency_jump1_onset: 0.0,
            frequency_jump1_amount: 0.0,
            frequency_jump2_onset: 0.0,
            frequency_jump2_amount: 0.0,
            vibrato_frequency: 0.0,
            vibrato_depth: 0.0,
            tremolo_frequency: 0.0,
            tremolo_depth: 0.0,
            sustain_punch: 0.0,
            flanger_offset: 0.0,
            flanger_offset_sweep: 0.0,
            normalization: false,
            amplification: 1.0,
            harmonics: 0,
            harmonics_falloff: 0.0,
            samples_per_second: DEFAULT_SAMPLE_RATE,
            wave_type: WaveType::Sine,
            interpolate_noise: false,
        }
    }
}

impl SynthParams {
    /// Length of the sound in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.attack + self.sustain + self.decay
    }

    /// Number of samples a render of these parameters produces:
    /// `ceil(duration * samples_per_second)`.
    ///
    /// The product is formed in double precision from the authored `f32`
    /// values. A product within `f32` precision of a whole number counts as
    /// that number, so 0.1 s at 22050 Hz gives 2205 samples and
    /// 0.04 s + 0.14 s gives 3969, even though the `f32` inputs are not exact
    /// decimals. Negative or non-finite durations yield zero samples.
    pub fn sample_count(&self) -> usize {
        let duration = f64::from(self.attack) + f64::from(self.sustain) + f64::from(self.decay);
        let exact = duration * f64::from(self.samples_per_second);
        if !(exact.is_finite() && exact > 0.0) {
            return 0;
        }
        let nearest = round(exact);
        let count = if fabs(exact - nearest) <= nearest * f64::from(f32::EPSILON) {
            nearest
        } else {
            ceil(exact)
        };
        count as usize
    }

    /// Derives the immutable per-session view of these parameters.
    pub fn resolve(&self) -> ResolvedParams {
        ResolvedParams::new(*self)
    }
}

/// Per-session snapshot of [`SynthParams`] with percentages scaled to `0..=1`.
///
/// # Degenerate envelopes
///
/// Segment comparisons are strict, so a zero-length attack or sustain segment
/// is simply never entered. A zero-length decay segment contributes silence
/// (amplitude 0) instead of dividing by zero, and a zero total duration makes
/// [`frequency_at`](Self::frequency_at) fall back to `repeat_frequency` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParams {
    params: SynthParams,
    jump1_onset: f32,
    jump1_amount: f32,
    jump2_onset: f32,
    jump2_amount: f32,
    tremolo_depth: f32,
    sustain_punch: f32,
}

impl ResolvedParams {
    /// Resolve a copy of `params`.
    pub fn new(params: SynthParams) -> Self {
        Self {
            params,
            jump1_onset: params.frequency_jump1_onset / 100.0,
            jump1_amount: params.frequency_jump1_amount / 100.0,
            jump2_onset: params.frequency_jump2_onset / 100.0,
            jump2_amount: params.frequency_jump2_amount / 100.0,
            tremolo_depth: params.tremolo_depth / 100.0,
            sustain_punch: params.sustain_punch / 100.0,
        }
    }

    /// The authored values this view was resolved from.
    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Length of the sound in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.params.duration()
    }

    /// Jump 1 onset as a fraction of a repetition.
    pub fn jump1_onset(&self) -> f32 {
        self.jump1_onset
    }

    /// Jump 1 amount as a fraction (0.6 = +60%).
    pub fn jump1_amount(&self) -> f32 {
        self.jump1_amount
    }

    /// Jump 2 onset as a fraction of a repetition.
    pub fn jump2_onset(&self) -> f32 {
        self.jump2_onset
    }

    /// Jump 2 amount as a fraction.
    pub fn jump2_amount(&self) -> f32 {
        self.jump2_amount
    }

    /// Tremolo depth as a fraction.
    pub fn tremolo_depth(&self) -> f32 {
        self.tremolo_depth
    }

    /// Sustain punch as a fraction.
    pub fn sustain_punch(&self) -> f32 {
        self.sustain_punch
    }

    /// Envelope level at `time` seconds.
    ///
    /// Linear attack from 0 to 1, a sustain segment starting at
    /// `1 + sustain_punch` and settling to 1, then a linear decay. The decay
    /// line keeps falling past the end of the sound; renders never sample
    /// beyond [`SynthParams::sample_count`].
    ///
    /// Tremolo, when enabled, scales the result by
    /// `1 - depth * (0.5 + 0.5 * cos(2π · time · tremolo_frequency))`.
    pub fn amplitude_at(&self, time: f32) -> f32 {
        let p = &self.params;
        let mut amplitude = if time < p.attack {
            time / p.attack
        } else if time < p.attack + p.sustain {
            1.0 + self.sustain_punch * (1.0 - (time - p.attack) / p.sustain)
        } else if p.decay > 0.0 {
            1.0 - (time - p.attack - p.sustain) / p.decay
        } else {
            0.0
        };

        if self.tremolo_depth != 0.0 {
            amplitude *= 1.0
                - self.tremolo_depth * (0.5 + 0.5 * cosf(2.0 * PI * time * p.tremolo_frequency));
        }
        amplitude
    }

    /// Instantaneous frequency in Hz at `time` seconds.
    ///
    /// Within each repetition (`max(repeat_frequency, 1 / duration)` per
    /// second) the position `frac ∈ [0, 1)` drives a quadratic sweep, and the
    /// two jumps multiply the result once `frac` passes their onsets. Both
    /// jumps are checked independently, so they stack.
    ///
    /// Vibrato is *added* to the frequency (unlike tremolo, which multiplies
    /// the amplitude). The result never goes below zero.
    pub fn frequency_at(&self, time: f32) -> f32 {
        let p = &self.params;
        let duration = self.duration();
        let repeat_frequency = if duration > 0.0 {
            p.repeat_frequency.max(1.0 / duration)
        } else {
            p.repeat_frequency
        };
        let frac = fract(time * repeat_frequency);

        let mut frequency =
            p.frequency + frac * p.frequency_sweep + frac * frac * p.frequency_delta_sweep;
        if frac > self.jump1_onset {
            frequency *= 1.0 + self.jump1_amount;
        }
        if frac > self.jump2_onset {
            frequency *= 1.0 + self.jump2_amount;
        }

        if p.vibrato_depth != 0.0 {
            frequency +=
                1.0 - p.vibrato_depth * (0.5 - 0.5 * sinf(2.0 * PI * time * p.vibrato_frequency));
        }
        frequency.max(0.0)
    }
}
