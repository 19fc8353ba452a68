//! Chispa Synth - procedural sound-effect synthesis engine
//!
//! This crate turns a flat set of authored numbers into a finished mono sound
//! effect: no samples, no files, just envelopes, wave shapes and a couple of
//! buffer-wide effects.
//!
//! # Pipeline
//!
//! ```text
//! SynthParams ──resolve──▶ SynthesisSession ──▶ f32 buffer ──▶ flange ──▶ normalize/amplify ──▶ quantize ──▶ i16
//!                           (owns one WaveGenerator)
//! ```
//!
//! ## Parameters
//!
//! - [`SynthParams`] - Raw authored values (seconds, Hz, percent, milliseconds)
//! - [`ResolvedParams`] - Immutable per-session copy with percentages normalized,
//!   owning the envelope ([`ResolvedParams::amplitude_at`]) and frequency
//!   ([`ResolvedParams::frequency_at`]) model
//! - [`PARAMS`] / [`ParamEntry`] - Name-addressable parameter table for editors
//!   and preset tooling
//!
//! ## Wave generators
//!
//! - [`WaveType`] - The ten selectable shapes, with the case-sensitive name lookup
//!   used by configuration loaders
//! - [`WaveGenerator`] - Closed set of generators: seven pure shapes plus
//!   [`NoiseGenerator`] (white, pink, brown)
//!
//! ## Rendering
//!
//! - [`SynthesisSession`] - Per-sample loop with phase accumulation and harmonics
//! - [`flange`] / [`normalize_amplify`] - Post-processing
//! - [`quantize`] - Float to 16-bit PCM
//!
//! # Example
//!
//! ```rust
//! use chispa_synth::{SynthParams, WaveType, synthesize_seeded};
//!
//! let params = SynthParams {
//!     frequency: 200.0,
//!     sustain: 0.04,
//!     decay: 0.14,
//!     frequency_jump1_amount: 60.0,
//!     wave_type: WaveType::Sawtooth,
//!     ..SynthParams::default()
//! };
//!
//! let pcm = synthesize_seeded(&params, 7);
//! assert_eq!(pcm.len(), 3969);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for buffers). Disable the
//! default `std` feature:
//!
//! ```toml
//! [dependencies]
//! chispa-synth = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, [`SynthesisSession::new`] cannot draw an entropy seed and uses
//! a fixed one; pass your own through [`SynthesisSession::with_seed`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod math;
pub mod noise;
pub mod param_info;
pub mod params;
pub mod post_process;
pub mod quantize;
pub mod session;
pub mod wave;

use alloc::vec::Vec;

// Re-export main types at crate root
pub use error::SynthError;
pub use math::fract;
pub use noise::{NoiseColor, NoiseGenerator, PinkFilter};
pub use param_info::{PARAMS, ParamEntry, ParamUnit, find_param};
pub use params::{DEFAULT_SAMPLE_RATE, ResolvedParams, SynthParams};
pub use post_process::{flange, normalize_amplify};
pub use quantize::{quantize, quantize_sample};
pub use session::{MAX_HARMONICS, SynthesisSession, harmonic_weights};
pub use wave::{WaveGenerator, WaveType};

/// Renders `params` through the full pipeline and returns 16-bit PCM.
///
/// Noise generators are seeded from entropy (or a fixed seed without `std`);
/// use [`synthesize_seeded`] for reproducible output.
pub fn synthesize(params: &SynthParams) -> Vec<i16> {
    quantize(&SynthesisSession::new(params).render())
}

/// Renders `params` through the full pipeline and returns the float buffer.
///
/// Same as [`synthesize`] minus the quantization step; values are not clamped.
pub fn synthesize_f32(params: &SynthParams) -> Vec<f32> {
    SynthesisSession::new(params).render()
}

/// Deterministic variant of [`synthesize`].
pub fn synthesize_seeded(params: &SynthParams, seed: u64) -> Vec<i16> {
    quantize(&SynthesisSession::with_seed(params, seed).render())
}

/// Deterministic variant of [`synthesize_f32`].
pub fn synthesize_f32_seeded(params: &SynthParams, seed: u64) -> Vec<f32> {
    SynthesisSession::with_seed(params, seed).render()
}
