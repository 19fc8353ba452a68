//! Integration tests for chispa-io: rendered sounds written and read back.

use chispa_io::{
    OutputFormat, WavFormat, read_pcm_i16, read_wav, read_wav_info, write_sound, write_wav_i16,
};
use chispa_synth::{SynthParams, WaveType, quantize, synthesize_f32_seeded};
use tempfile::tempdir;

fn blip() -> SynthParams {
    SynthParams {
        frequency: 200.0,
        sustain: 0.04,
        decay: 0.14,
        frequency_jump1_amount: 60.0,
        wave_type: WaveType::Sawtooth,
        ..SynthParams::default()
    }
}

// ---------------------------------------------------------------------------
// WAV output
// ---------------------------------------------------------------------------

#[test]
fn rendered_wav_reads_back_as_quantized_samples() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blip.wav");
    let samples = synthesize_f32_seeded(&blip(), 0);

    let format = write_sound(&path, &samples, 22050, false).unwrap();
    assert_eq!(format, OutputFormat::Wav);

    let (loaded, spec) = read_wav(&path).unwrap();
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(loaded.len(), 3969);

    let expected: Vec<f32> = quantize(&samples)
        .iter()
        .map(|&s| f32::from(s) / 32768.0)
        .collect();
    assert_eq!(loaded, expected);
}

#[test]
fn float_wav_keeps_unclamped_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loud.wav");
    let params = SynthParams {
        amplification: 3.0,
        ..blip()
    };
    let samples = synthesize_f32_seeded(&params, 0);
    assert!(samples.iter().any(|s| s.abs() > 1.0));

    write_sound(&path, &samples, params.samples_per_second, true).unwrap();
    let info = read_wav_info(&path).unwrap();
    assert_eq!(info.format, WavFormat::IeeeFloat);
    assert_eq!(info.bits_per_sample, 32);

    let (loaded, _) = read_wav(&path).unwrap();
    assert_eq!(loaded, samples);
}

#[test]
fn wav_info_reports_render_duration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blip.wav");
    let params = blip();
    let pcm = quantize(&synthesize_f32_seeded(&params, 0));
    write_wav_i16(&path, &pcm, params.samples_per_second).unwrap();

    let info = read_wav_info(&path).unwrap();
    assert_eq!(info.num_frames, 3969);
    assert!((info.duration_secs - 0.18).abs() < 1.0 / 22050.0);
}

#[test]
fn custom_sample_rate_is_stored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hi.wav");
    let params = SynthParams {
        samples_per_second: 44100,
        ..blip()
    };
    let samples = synthesize_f32_seeded(&params, 0);
    write_sound(&path, &samples, params.samples_per_second, false).unwrap();

    let (loaded, spec) = read_wav(&path).unwrap();
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(loaded.len(), params.sample_count());
}

// ---------------------------------------------------------------------------
// Raw PCM output
// ---------------------------------------------------------------------------

#[test]
fn raw_pcm_is_two_bytes_per_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out_16bit.pcm");
    let samples = synthesize_f32_seeded(&blip(), 0);

    assert_eq!(
        write_sound(&path, &samples, 22050, false).unwrap(),
        OutputFormat::RawPcm
    );
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 3969 * 2);
    assert_eq!(read_pcm_i16(bytes.as_slice()).unwrap(), quantize(&samples));
}

#[test]
fn unsupported_extension_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blip.ogg");
    let err = write_sound(&path, &[0.0; 8], 22050, false).unwrap_err();
    assert!(err.to_string().contains(".ogg"));
    assert!(!path.exists());
}
