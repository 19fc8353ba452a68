//! Render a short blip and write it as raw 16-bit little-endian PCM.
//!
//! Run with: cargo run -p chispa-synth --example render_pcm
//!
//! Play the result with e.g. `aplay -f S16_LE -r 22050 out_16bit.pcm`.

use std::fs::File;
use std::io::{BufWriter, Write};

use chispa_synth::{SynthParams, WaveType, synthesize};

fn main() -> std::io::Result<()> {
    let params = SynthParams {
        frequency: 200.0,
        sustain: 0.04,
        decay: 0.14,
        frequency_jump1_amount: 60.0,
        wave_type: WaveType::Sawtooth,
        ..SynthParams::default()
    };

    let pcm = synthesize(&params);
    let mut out = BufWriter::new(File::create("out_16bit.pcm")?);
    for sample in &pcm {
        out.write_all(&sample.to_le_bytes())?;
    }
    out.flush()?;

    println!(
        "Wrote {} samples ({:.3} s at {} Hz) to out_16bit.pcm",
        pcm.len(),
        params.duration(),
        params.samples_per_second
    );
    Ok(())
}
