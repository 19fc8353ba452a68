//! Error type for the synthesis engine.

use alloc::string::String;

/// Errors raised while configuring a synthesis run.
///
/// Numeric parameters never fail: out-of-range harmonics are clamped and
/// degenerate envelopes are handled in [`crate::ResolvedParams`]. Only
/// name-based lookups coming from configuration files can go wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    /// The string does not name any [`crate::WaveType`].
    #[error("unrecognized wave type: '{0}'")]
    UnknownWaveType(String),

    /// The string does not name any entry of [`crate::PARAMS`].
    #[error("unknown parameter: '{0}'")]
    UnknownParam(String),
}
