//! Params command: list the parameter table.

use super::common::load_preset;
use chispa_synth::PARAMS;
use clap::Args;

#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// Also show the values from this preset
    #[arg(short, long)]
    pub preset: Option<String>,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let preset = args.preset.as_deref().map(load_preset).transpose()?;

    println!("Parameters:");
    println!("===========");
    if let Some(preset) = &preset {
        println!("Values from preset '{}'", preset.name);
    }
    println!();

    for entry in PARAMS {
        let range = format!(
            "{}..{}{}",
            entry.min,
            entry.max,
            entry.unit.suffix()
        );
        match &preset {
            Some(preset) => {
                let value = (entry.get)(&preset.params);
                println!(
                    "  {:22} {:>10} {:22} {}",
                    entry.name, value, range, entry.description
                );
            }
            None => println!("  {:22} {:22} {}", entry.name, range, entry.description),
        }
    }

    println!();
    println!("Set with: chispa render out.wav --set <name>=<value>");

    Ok(())
}
