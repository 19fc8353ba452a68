//! Phase-triggered noise generators.
//!
//! Noise here is not a fresh random value per sample. A new value is drawn
//! each time the doubled phase wraps, i.e. twice per carrier cycle, and held
//! (or linearly blended) until the next wrap. The noise "pitch" therefore
//! follows the synthesized frequency, sweeps and jumps included.
//!
//! Each generator owns a [`Pcg32`] seeded at construction, so two generators
//! built from the same seed produce identical streams.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::math::{fract, mix};

/// Spectral color of a [`NoiseGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoiseColor {
    /// Uniform values in `[-1, 1)`.
    White,
    /// White noise through [`PinkFilter`].
    Pink,
    /// Random walk with steps in `[-0.01, 0.01)`, bounded to `[-1, 1]`.
    Brown,
}

/// Fixed pink-noise filter bank (Paul Kellett's refined approximation).
///
/// Six one-pole stages plus a one-sample delay tap. The coefficients are part
/// of the sound and not meant to be tuned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinkFilter {
    taps: [f32; 7],
}

impl PinkFilter {
    /// `(pole, gain)` of the six recursive stages.
    const STAGES: [(f32, f32); 6] = [
        (0.99886, 0.0555179),
        (0.99332, 0.0750759),
        (0.96900, 0.1538520),
        (0.86650, 0.3104856),
        (0.55000, 0.5329522),
        (-0.7616, 0.0168980),
    ];
    const DIRECT_GAIN: f32 = 0.5362;
    const DELAY_GAIN: f32 = 0.115926;

    /// Create a filter with all taps at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one white sample, return one pink sample.
    pub fn process(&mut self, white: f32) -> f32 {
        for (tap, &(pole, gain)) in self.taps.iter_mut().zip(Self::STAGES.iter()) {
            *tap = pole * *tap + white * gain;
        }
        let pink = (self.taps.iter().sum::<f32>() + white * Self::DIRECT_GAIN) / 7.0;
        self.taps[6] = white * Self::DELAY_GAIN;
        pink
    }

    /// Current filter state.
    pub fn taps(&self) -> &[f32; 7] {
        &self.taps
    }
}

/// Sample-and-hold noise source driven by phase wraparound.
///
/// # Example
///
/// ```rust
/// use chispa_synth::{NoiseColor, NoiseGenerator};
///
/// let mut noise = NoiseGenerator::new(NoiseColor::White, false, 42);
/// // Nothing has been drawn before the first wrap
/// assert_eq!(noise.sample(0.1), 0.0);
/// // Doubled phase goes 0.2 → 0.0: wrap, new value
/// let held = noise.sample(0.5);
/// assert!((-1.0..=1.0).contains(&held));
/// assert_eq!(noise.sample(0.6), held);
/// ```
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    color: NoiseColor,
    interpolate: bool,
    rng: Pcg32,
    pink: PinkFilter,
    /// Last doubled phase, for wrap detection
    previous_phase: f32,
    previous_random: f32,
    current_random: f32,
}

impl NoiseGenerator {
    /// Create a generator of the given color.
    ///
    /// With `interpolate`, output glides linearly from the previous value to
    /// the current one across each half cycle instead of stepping.
    pub fn new(color: NoiseColor, interpolate: bool, seed: u64) -> Self {
        Self {
            color,
            interpolate,
            rng: Pcg32::seed_from_u64(seed),
            pink: PinkFilter::new(),
            previous_phase: 0.0,
            previous_random: 0.0,
            current_random: 0.0,
        }
    }

    /// Noise color.
    pub fn color(&self) -> NoiseColor {
        self.color
    }

    /// Whether output is interpolated between draws.
    pub fn interpolates(&self) -> bool {
        self.interpolate
    }

    /// The value drawn at the most recent trigger.
    pub fn current(&self) -> f32 {
        self.current_random
    }

    /// Sample at carrier `phase ∈ [0, 1)`.
    #[inline]
    pub fn sample(&mut self, phase: f32) -> f32 {
        let phase = fract(phase * 2.0);
        if phase < self.previous_phase {
            self.trigger();
        }
        self.previous_phase = phase;

        if self.interpolate {
            mix(self.previous_random, self.current_random, phase)
        } else {
            self.current_random
        }
    }

    /// Archive the current value and draw the next one.
    pub fn trigger(&mut self) {
        self.previous_random = self.current_random;
        self.current_random = match self.color {
            NoiseColor::White => self.rng.random_range(-1.0f32..1.0),
            NoiseColor::Pink => {
                let white = self.rng.random_range(-1.0f32..1.0);
                self.pink.process(white)
            }
            NoiseColor::Brown => {
                (self.current_random + self.rng.random_range(-0.01f32..0.01)).clamp(-1.0, 1.0)
            }
        };
    }
}
