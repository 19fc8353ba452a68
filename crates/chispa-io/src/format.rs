//! Output container selection.

use crate::{Error, Result, write_pcm_file, write_wav_f32, write_wav_i16};
use chispa_synth::quantize;
use std::fmt;
use std::path::Path;

/// Container a rendered sound is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// RIFF WAV, 16-bit integer or 32-bit float.
    Wav,
    /// Headerless 16-bit little-endian PCM.
    RawPcm,
}

impl OutputFormat {
    /// Pick the format from the file extension (`.wav`, `.pcm`, `.raw`),
    /// case-insensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("wav") => Ok(Self::Wav),
            Some("pcm" | "raw") => Ok(Self::RawPcm),
            Some(other) => Err(Error::UnsupportedFormat(format!(
                "'.{other}' (expected .wav, .pcm or .raw)"
            ))),
            None => Err(Error::UnsupportedFormat(format!(
                "{} has no extension (expected .wav, .pcm or .raw)",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wav => write!(f, "WAV"),
            Self::RawPcm => write!(f, "raw PCM"),
        }
    }
}

/// Write a rendered float buffer to `path`, choosing the container from its
/// extension.
///
/// With `float`, WAV output keeps the unclamped 32-bit float samples;
/// otherwise samples go through [`quantize`]. Raw PCM is always 16-bit, so
/// asking for float raw output is an error.
pub fn write_sound<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
    float: bool,
) -> Result<OutputFormat> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    match (format, float) {
        (OutputFormat::Wav, true) => write_wav_f32(path, samples, sample_rate)?,
        (OutputFormat::Wav, false) => write_wav_i16(path, &quantize(samples), sample_rate)?,
        (OutputFormat::RawPcm, false) => write_pcm_file(path, &quantize(samples))?,
        (OutputFormat::RawPcm, true) => {
            return Err(Error::UnsupportedFormat(
                "raw PCM output is 16-bit only".to_string(),
            ));
        }
    }
    tracing::info!(path = %path.display(), %format, samples = samples.len(), "sound written");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(OutputFormat::from_path("a.wav").unwrap(), OutputFormat::Wav);
        assert_eq!(OutputFormat::from_path("a.WAV").unwrap(), OutputFormat::Wav);
        assert_eq!(OutputFormat::from_path("a.pcm").unwrap(), OutputFormat::RawPcm);
        assert_eq!(OutputFormat::from_path("dir/a.raw").unwrap(), OutputFormat::RawPcm);
    }

    #[test]
    fn test_unknown_extension() {
        assert!(matches!(
            OutputFormat::from_path("a.mp3"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            OutputFormat::from_path("noext"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_float_raw_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.raw");
        assert!(write_sound(&path, &[0.0], 22050, true).is_err());
        assert!(!path.exists());
    }
}
