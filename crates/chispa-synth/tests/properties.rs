//! Property-based tests for chispa-synth.
//!
//! Checks output length, harmonic weight normalization, quantizer bounds and
//! the post-processing identities over randomized parameters.

use chispa_synth::{
    MAX_HARMONICS, SynthParams, WaveType, flange, harmonic_weights, normalize_amplify,
    quantize_sample, synthesize_f32_seeded,
};
use proptest::prelude::*;

fn wave_type() -> impl Strategy<Value = WaveType> {
    (0usize..WaveType::ALL.len()).prop_map(|i| WaveType::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rendered length covers duration * rate with whole samples, whatever
    /// the shape and modulation settings.
    #[test]
    fn output_length_matches_duration(
        attack in 0.0f32..0.05,
        sustain in 0.0f32..0.05,
        decay in 0.0f32..0.05,
        frequency in 0.0f32..2000.0,
        frequency_sweep in -2000.0f32..2000.0,
        vibrato_depth in 0.0f32..50.0,
        harmonics in 0i32..8,
        harmonics_falloff in 0.0f32..1.0,
        rate in prop::sample::select(vec![8000u32, 11025, 22050, 44100]),
        wave_type in wave_type(),
        seed in any::<u64>(),
    ) {
        let params = SynthParams {
            attack,
            sustain,
            decay,
            frequency,
            frequency_sweep,
            vibrato_depth,
            vibrato_frequency: 6.0,
            harmonics,
            harmonics_falloff,
            samples_per_second: rate,
            wave_type,
            ..SynthParams::default()
        };
        let samples = synthesize_f32_seeded(&params, seed);
        prop_assert_eq!(samples.len(), params.sample_count());

        // Whole samples covering the duration, allowing for f32 input rounding
        let exact = (f64::from(attack) + f64::from(sustain) + f64::from(decay)) * f64::from(rate);
        let len = samples.len() as f64;
        prop_assert!(len < exact + 1.0, "{} samples for {}", len, exact);
        prop_assert!(
            len >= exact * (1.0 - f64::from(f32::EPSILON)),
            "{} samples for {}",
            len,
            exact
        );
        prop_assert!(samples.iter().all(|s| s.is_finite()));
    }

    /// Harmonic weights sum to 1 for every clamped count and falloff.
    #[test]
    fn harmonic_weights_normalized(
        harmonics in -2i32..10,
        falloff in 0.0f32..=1.0,
    ) {
        let weights = harmonic_weights(harmonics, falloff);
        let sum: f32 = weights.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-5, "sum {}", sum);
        prop_assert!(weights.len() <= MAX_HARMONICS as usize + 1);
        prop_assert!(weights.windows(2).all(|w| w[1] <= w[0]));
    }

    /// The quantizer never wraps: ordering is preserved and values stay in
    /// the i16 range.
    #[test]
    fn quantizer_is_monotonic(a in -4.0f32..4.0, b in -4.0f32..4.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quantize_sample(lo) <= quantize_sample(hi));
    }

    /// Zero offset and zero sweep leave any buffer bit-identical.
    #[test]
    fn flanger_identity(buffer in prop::collection::vec(-1.0f32..=1.0, 0..512)) {
        let params = SynthParams::default();
        let mut processed = buffer.clone();
        flange(&mut processed, &params);
        prop_assert_eq!(processed, buffer);
    }

    /// Normalizing a buffer with a positive peak makes that peak equal the
    /// amplification exactly.
    #[test]
    fn normalization_peak_is_exact(
        buffer in prop::collection::vec(-1.0f32..=1.0, 1..512),
        amplification in 0.01f32..4.0,
    ) {
        let peak = buffer.iter().copied().fold(0.0f32, f32::max);
        prop_assume!(peak > 0.0);

        let params = SynthParams {
            normalization: true,
            amplification,
            ..SynthParams::default()
        };
        let mut processed = buffer;
        normalize_amplify(&mut processed, &params);
        let new_peak = processed.iter().copied().fold(f32::MIN, f32::max);
        prop_assert_eq!(new_peak, amplification);
    }
}
