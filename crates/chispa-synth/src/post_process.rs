//! Buffer-wide effects applied after generation.
//!
//! Both stages work in place on the float buffer and read only the authored
//! parameters (no percentages involved).

use alloc::vec::Vec;

use crate::params::SynthParams;

/// Mix each sample with a later sample of the unprocessed buffer.
///
/// The delay for sample `i` is `flanger_offset + flanger_offset_sweep * i / len`
/// milliseconds, truncated to whole samples. Targets past either end of the
/// buffer are skipped, including offsets too large to represent. With both
/// offset and sweep at zero the buffer is left untouched.
pub fn flange(buffer: &mut [f32], params: &SynthParams) {
    if params.flanger_offset == 0.0 && params.flanger_offset_sweep == 0.0 {
        return;
    }

    let snapshot: Vec<f32> = buffer.to_vec();
    let len = snapshot.len() as f32;
    let rate = params.samples_per_second as f32;

    for (i, sample) in buffer.iter_mut().enumerate() {
        let offset_ms = params.flanger_offset + params.flanger_offset_sweep * i as f32 / len;
        // Saturating cast: NaN becomes 0, huge values clamp to the i64 range
        let offset = (offset_ms * rate / 1000.0) as i64;
        let Some(target) = i64::try_from(i)
            .ok()
            .and_then(|i| i.checked_add(offset))
            .and_then(|target| usize::try_from(target).ok())
        else {
            continue;
        };
        if let Some(delayed) = snapshot.get(target) {
            *sample += delayed;
        }
    }
}

/// Apply normalization and the output gain.
///
/// With `normalization` on, the buffer is scaled so that its largest sample
/// becomes exactly `amplification`. The peak is the signed maximum (starting
/// from 0), so an all-negative or silent buffer is left alone. Without
/// normalization every sample is multiplied by `amplification`. A unity
/// factor never touches the buffer.
///
/// Normalized samples are computed as `s / peak * amplification` rather than
/// `s * (amplification / peak)`. The two can differ by one ULP; only the
/// first guarantees the peak lands on `amplification` exactly.
pub fn normalize_amplify(buffer: &mut [f32], params: &SynthParams) {
    let amplification = params.amplification;

    if params.normalization {
        let peak = buffer.iter().copied().fold(0.0f32, f32::max);
        if peak == 0.0 {
            #[cfg(feature = "tracing")]
            tracing::debug!("normalize: silent buffer, skipped");
            return;
        }
        if peak == amplification {
            return;
        }
        for sample in buffer.iter_mut() {
            *sample = *sample / peak * amplification;
        }
    } else if amplification != 1.0 {
        for sample in buffer.iter_mut() {
            *sample *= amplification;
        }
    }
}
