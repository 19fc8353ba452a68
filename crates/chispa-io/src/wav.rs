//! WAV file reading and writing.
//!
//! Rendered effects are mono. Writers take the sample rate directly; the
//! reader mixes multi-channel files down to mono so foreign files can be
//! compared against rendered buffers.

use crate::Result;
use chispa_synth::DEFAULT_SAMPLE_RATE;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let num_frames = u64::from(reader.duration());
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample (16 for PCM output, 32 for float output).
    pub bits_per_sample: u16,
}

impl WavSpec {
    /// Mono 16-bit integer PCM at `sample_rate`.
    pub fn pcm16(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Mono 32-bit float at `sample_rate`.
    pub fn float32(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 32,
        }
    }
}

impl Default for WavSpec {
    fn default() -> Self {
        Self::pcm16(DEFAULT_SAMPLE_RATE)
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Read a WAV file and return samples as f32 along with the spec.
///
/// Integer samples are scaled by `2^(bits-1)`, so a 16-bit file written by
/// [`write_wav_i16`] reads back as `pcm / 32768`. Multi-channel files are
/// mixed down to mono by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = usize::from(spec.channels.max(1));

    let samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    tracing::debug!(path = %path.display(), samples = mono.len(), "read wav");
    Ok((mono, spec))
}

/// Write already-quantized 16-bit samples as a mono WAV file.
pub fn write_wav_i16<P: AsRef<Path>>(path: P, samples: &[i16], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WavWriter::create(path, WavSpec::pcm16(sample_rate).into())?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    tracing::debug!(path = %path.display(), samples = samples.len(), sample_rate, "wrote 16-bit wav");
    Ok(())
}

/// Write float samples as a mono 32-bit float WAV file.
///
/// Values are stored as-is; nothing is clamped.
pub fn write_wav_f32<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WavWriter::create(path, WavSpec::float32(sample_rate).into())?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    tracing::debug!(path = %path.display(), samples = samples.len(), sample_rate, "wrote float wav");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_roundtrip_i16() {
        let samples: Vec<i16> = vec![0, 1, -1, 16384, -16384, i16::MAX, i16::MIN];
        let file = NamedTempFile::new().unwrap();
        write_wav_i16(file.path(), &samples, 22050).unwrap();

        let (loaded, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec, WavSpec::pcm16(22050));
        let expected: Vec<f32> = samples.iter().map(|&s| f32::from(s) / 32768.0).collect();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_roundtrip_f32_is_exact() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin() * 1.5).collect();
        let file = NamedTempFile::new().unwrap();
        write_wav_f32(file.path(), &samples, 44100).unwrap();

        let (loaded, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec, WavSpec::float32(44100));
        assert_eq!(loaded, samples);
    }

    #[test]
    fn test_info_without_samples() {
        let file = NamedTempFile::new().unwrap();
        write_wav_i16(file.path(), &[0; 2205], 22050).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_frames, 2205);
        assert_eq!(info.format, WavFormat::Pcm);
        assert!((info.duration_secs - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_default_spec() {
        let spec = WavSpec::default();
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_wav(dir.path().join("nope.wav")).is_err());
    }
}
