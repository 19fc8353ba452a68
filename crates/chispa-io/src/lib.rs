//! File output for Chispa sound effects.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`write_wav_i16`], [`write_wav_f32`] and [`read_wav`]
//! - **Raw PCM**: [`write_pcm_i16`] / [`read_pcm_i16`], headerless 16-bit
//!   little-endian mono
//! - **Format dispatch**: [`OutputFormat`] picks the container from a file
//!   extension and [`write_sound`] renders a float buffer into it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chispa_io::write_sound;
//! use chispa_synth::{SynthParams, WaveType, synthesize_f32};
//!
//! let params = SynthParams {
//!     frequency: 660.0,
//!     sustain: 0.1,
//!     decay: 0.2,
//!     wave_type: WaveType::Square,
//!     ..SynthParams::default()
//! };
//! let samples = synthesize_f32(&params);
//! write_sound("coin.wav", &samples, params.samples_per_second, false)?;
//! # Ok::<(), chispa_io::Error>(())
//! ```

mod format;
mod pcm;
mod wav;

pub use format::{OutputFormat, write_sound};
pub use pcm::{read_pcm_i16, write_pcm_file, write_pcm_i16};
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav_f32, write_wav_i16};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested output format is not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Raw PCM input ended in the middle of a sample.
    #[error("Truncated PCM data: {0} trailing byte(s)")]
    TruncatedPcm(usize),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
