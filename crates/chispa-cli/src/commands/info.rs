//! Info command: describe a WAV file.

use anyhow::Context;
use chispa_io::{read_wav, read_wav_info};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// WAV file to inspect
    pub file: PathBuf,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let (samples, _) = read_wav(&args.file)?;
    let peak = samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));

    println!("File: {}", args.file.display());
    println!("  Format:      {:?}", info.format);
    println!("  Channels:    {}", info.channels);
    println!("  Sample rate: {} Hz", info.sample_rate);
    println!("  Bit depth:   {}", info.bits_per_sample);
    println!("  Samples:     {}", info.num_frames);
    println!("  Duration:    {:.3} s", info.duration_secs);
    println!("  Peak:        {:.4}", peak);

    Ok(())
}
