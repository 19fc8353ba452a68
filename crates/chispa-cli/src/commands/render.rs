//! Render command: synthesize a sound and write it to disk.

use super::common::{SoundArgs, warn_on_validation};
use anyhow::Context;
use chispa_io::write_sound;
use chispa_synth::SynthesisSession;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file (.wav, .pcm or .raw)
    pub output: PathBuf,

    #[command(flatten)]
    pub sound: SoundArgs,

    /// Seed for the noise generators (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a 32-bit float WAV instead of 16-bit PCM
    #[arg(long)]
    pub float: bool,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let preset = args.sound.build_preset()?;
    let params = &preset.params;

    if params.samples_per_second == 0 {
        anyhow::bail!("Sample rate must be greater than zero");
    }
    warn_on_validation(params);

    let mut session = match args.seed {
        Some(seed) => SynthesisSession::with_seed(params, seed),
        None => SynthesisSession::new(params),
    };
    let samples = session.render();

    let format = write_sound(&args.output, &samples, params.samples_per_second, args.float)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Rendered '{}' ({}): {} samples, {:.3} s at {} Hz",
        preset.name,
        params.wave_type,
        samples.len(),
        params.duration(),
        params.samples_per_second
    );
    println!("Wrote {} ({})", args.output.display(), format);

    Ok(())
}
