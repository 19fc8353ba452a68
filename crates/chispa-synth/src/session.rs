//! The per-sample synthesis loop.
//!
//! A [`SynthesisSession`] is built once per sound. It resolves the authored
//! parameters, picks the wave generator and precomputes the harmonic mix,
//! then renders the whole buffer eagerly.
//!
//! # Phase accumulation
//!
//! The carrier phase starts at 0 and is advanced by `frequency_at(t) / rate`
//! before each sample is taken, wrapping into `[0, 1)`. It is independent of
//! the repetition fraction used inside the frequency model, so restarting a
//! sweep never causes a phase discontinuity.

use alloc::vec;
use alloc::vec::Vec;

use crate::math::fract;
use crate::params::{ResolvedParams, SynthParams};
use crate::post_process::{flange, normalize_amplify};
use crate::wave::WaveGenerator;

/// Upper bound on extra harmonic partials.
pub const MAX_HARMONICS: i32 = 5;

/// Seed used by [`SynthesisSession::new`] when no entropy source is available.
#[cfg(not(feature = "std"))]
const DEFAULT_SEED: u64 = 0x5eed_c41a;

/// Mixing weights for the fundamental and `harmonics` overtones.
///
/// `harmonics` is clamped to `0..=MAX_HARMONICS` and `falloff` to `0..=1`.
/// The weights form a geometric series with ratio `falloff`, normalized to
/// sum to 1. With no harmonics, or a falloff of 0, the result is `[1.0]`.
///
/// ```rust
/// use chispa_synth::harmonic_weights;
///
/// let w = harmonic_weights(1, 1.0);
/// assert_eq!(w, vec![0.5, 0.5]);
/// assert_eq!(harmonic_weights(3, 0.0), vec![1.0]);
/// ```
pub fn harmonic_weights(harmonics: i32, falloff: f32) -> Vec<f32> {
    let harmonics = harmonics.clamp(0, MAX_HARMONICS);
    // NaN falls through to the plain path as well
    if harmonics == 0 || !(falloff > 0.0) {
        return vec![1.0];
    }
    let falloff = falloff.min(1.0);

    let mut total = 0.0;
    let mut weight = 1.0;
    for _ in 0..=harmonics {
        total += weight;
        weight *= falloff;
    }

    let mut weights = Vec::with_capacity(harmonics as usize + 1);
    let mut weight = 1.0 / total;
    for _ in 0..=harmonics {
        weights.push(weight);
        weight *= falloff;
    }
    weights
}

/// One synthesis run over a resolved parameter set.
///
/// Owns its wave generator exclusively; noise state never leaks between
/// sessions.
///
/// # Example
///
/// ```rust
/// use chispa_synth::{SynthParams, SynthesisSession, WaveType};
///
/// let params = SynthParams {
///     frequency: 440.0,
///     sustain: 0.1,
///     wave_type: WaveType::Square,
///     ..SynthParams::default()
/// };
/// let mut session = SynthesisSession::with_seed(&params, 1);
/// let samples = session.render();
/// assert_eq!(samples.len(), session.sample_count());
/// ```
#[derive(Debug, Clone)]
pub struct SynthesisSession {
    params: ResolvedParams,
    generator: WaveGenerator,
    weights: Vec<f32>,
}

impl SynthesisSession {
    /// Create a session whose noise generators are seeded from entropy.
    ///
    /// Without the `std` feature there is no entropy source and a fixed seed
    /// is used instead.
    pub fn new(params: &SynthParams) -> Self {
        #[cfg(feature = "std")]
        let seed = rand::random::<u64>();
        #[cfg(not(feature = "std"))]
        let seed = DEFAULT_SEED;
        Self::with_seed(params, seed)
    }

    /// Create a session with a caller-chosen noise seed.
    ///
    /// Two sessions built from equal parameters and equal seeds render
    /// bit-identical buffers.
    pub fn with_seed(params: &SynthParams, seed: u64) -> Self {
        let params = params.resolve();
        let authored = params.params();
        let generator = WaveGenerator::new(authored.wave_type, authored.interpolate_noise, seed);
        let weights = harmonic_weights(authored.harmonics, authored.harmonics_falloff);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            wave = authored.wave_type.name(),
            samples = authored.sample_count(),
            partials = weights.len(),
            "synthesis session created"
        );

        Self {
            params,
            generator,
            weights,
        }
    }

    /// Resolved parameters driving this session.
    pub fn params(&self) -> &ResolvedParams {
        &self.params
    }

    /// Harmonic mixing weights, fundamental first.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Number of samples [`generate`](Self::generate) produces.
    pub fn sample_count(&self) -> usize {
        self.params.params().sample_count()
    }

    /// Run the per-sample loop and return the raw buffer.
    ///
    /// No flanger or gain stage is applied; see [`render`](Self::render).
    pub fn generate(&mut self) -> Vec<f32> {
        let count = self.sample_count();
        let mut data = Vec::with_capacity(count);
        let sample_to_time = (1.0 / f64::from(self.params.params().samples_per_second)) as f32;
        let mut phase = 0.0f32;

        for i in 0..count {
            let time = i as f32 * sample_to_time;
            phase = fract(phase + self.params.frequency_at(time) * sample_to_time);

            let sample = if let [_] = self.weights.as_slice() {
                self.generator.sample(phase, time)
            } else {
                let mut mixed = 0.0;
                for (k, weight) in self.weights.iter().enumerate() {
                    let harmonic_phase = fract(phase * (k + 1) as f32);
                    mixed += self.generator.sample(harmonic_phase, time) * weight;
                }
                mixed
            };

            data.push(sample * self.params.amplitude_at(time));
        }
        data
    }

    /// Generate, then apply the flanger and normalization/amplification.
    pub fn render(&mut self) -> Vec<f32> {
        let mut data = self.generate();
        let authored = self.params.params();
        flange(&mut data, authored);
        normalize_amplify(&mut data, authored);
        data
    }
}
