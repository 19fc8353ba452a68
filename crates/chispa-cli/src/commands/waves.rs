//! Waves command: list the available wave types.

use chispa_synth::WaveType;
use clap::Args;

#[derive(Args, Debug)]
pub struct WavesArgs {
    /// Print only the names, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: WavesArgs) -> anyhow::Result<()> {
    if args.quiet {
        for wave in WaveType::ALL {
            println!("{}", wave);
        }
        return Ok(());
    }

    println!("Wave Types:");
    println!("===========");
    for wave in WaveType::ALL {
        println!("  {:12} - {}", wave.name(), describe(wave));
    }

    Ok(())
}

fn describe(wave: WaveType) -> &'static str {
    match wave {
        WaveType::Sine => "pure tone",
        WaveType::Triangle => "soft, flute-like",
        WaveType::Sawtooth => "bright, buzzy ramp",
        WaveType::Square => "hollow chiptune pulse",
        WaveType::Tangent => "clipped tangent, harsh",
        WaveType::Whistle => "sine with a quiet 20th harmonic",
        WaveType::Breaker => "folded parabola, glassy",
        WaveType::WhiteNoise => "noise, flat spectrum",
        WaveType::PinkNoise => "noise, -3 dB/octave",
        WaveType::BrownNoise => "noise, -6 dB/octave rumble",
    }
}
