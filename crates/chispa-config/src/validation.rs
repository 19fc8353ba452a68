//! Parameter validation.
//!
//! The synthesizer accepts any numbers. These checks catch values that are
//! almost certainly authoring mistakes: non-finite values, values outside
//! the editor ranges of [`chispa_synth::PARAMS`], silent (zero-length)
//! sounds and unusable sample rates.
//!
//! # Example
//!
//! ```rust
//! use chispa_config::{SynthParams, ValidationError, validate_params};
//!
//! let params = SynthParams { sustain: 0.2, tremolo_depth: 250.0, ..SynthParams::default() };
//! assert!(matches!(
//!     validate_params(&params),
//!     Err(ValidationError::OutOfRange { .. })
//! ));
//! ```

use chispa_synth::{PARAMS, SynthParams};
use thiserror::Error;

/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 1000;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum suggested value.
        min: f32,
        /// Maximum suggested value.
        max: f32,
    },

    /// Parameter is NaN or infinite.
    #[error("parameter '{0}' is not a finite number")]
    NotFinite(String),

    /// Attack, sustain and decay add up to nothing.
    #[error("sound has zero duration")]
    ZeroDuration,

    /// Sample rate outside [`MIN_SAMPLE_RATE`]..=[`MAX_SAMPLE_RATE`].
    #[error("sample rate {0} Hz out of range [1000, 384000]")]
    SampleRate(u32),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Collect every problem with `params`, in table order.
pub fn check_params(params: &SynthParams) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for entry in PARAMS {
        let value = (entry.get)(params);
        if !value.is_finite() {
            errors.push(ValidationError::NotFinite(entry.name.to_string()));
        } else if !entry.in_range(value) {
            errors.push(ValidationError::OutOfRange {
                param: entry.name.to_string(),
                value,
                min: entry.min,
                max: entry.max,
            });
        }
    }

    if params.sample_count() == 0 && params.duration().is_finite() {
        errors.push(ValidationError::ZeroDuration);
    }

    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&params.samples_per_second) {
        errors.push(ValidationError::SampleRate(params.samples_per_second));
    }

    errors
}

/// Validate `params`, folding several problems into
/// [`ValidationError::Multiple`].
pub fn validate_params(params: &SynthParams) -> ValidationResult<()> {
    let mut errors = check_params(params);
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
