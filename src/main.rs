use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use gdtf_builder::{
    generate,
    library::{attributes::ATTRIBUTE_TABLE, preset_for, presets::CHANNEL_CATALOGUE, quick_fill},
    ChannelDefinition, FixtureDefinition,
};

#[derive(Parser)]
#[command(name = "gdtf-builder", about = "Build GDTF fixture packages", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .gdtf package from a TOML fixture definition
    Build {
        definition: PathBuf,
        /// Output file, defaults to the fixture name in the current directory
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Fill channels without channel sets from the built-in presets
        #[arg(long)]
        quick_fill: bool,
        /// Mark channels named like fine bytes or virtual dimmers as such
        #[arg(long)]
        guess: bool,
        /// Print description.xml to stdout
        #[arg(long)]
        print_xml: bool,
    },
    /// List known channel names and the attributes they resolve to
    Names,
    /// Show the quick-fill channel sets for a channel name
    Presets { channel: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Commands::Build {
            definition,
            out,
            quick_fill,
            guess,
            print_xml,
        } => build(definition, out, quick_fill, guess, print_xml),
        Commands::Names => {
            names();
            Ok(())
        }
        Commands::Presets { channel } => {
            presets(&channel);
            Ok(())
        }
    }
}

fn build(
    path: PathBuf,
    out: Option<PathBuf>,
    fill: bool,
    guess: bool,
    print_xml: bool,
) -> anyhow::Result<()> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("could not read fixture definition {}", path.display()))?;
    let mut definition: FixtureDefinition = toml::from_str(&text)
        .with_context(|| format!("invalid fixture definition {}", path.display()))?;

    if guess {
        let guessed = channels(&mut definition)
            .map(ChannelDefinition::apply_guess)
            .filter(|&changed| changed)
            .count();
        log::info!("guessed fine or virtual role for {guessed} channels");
    }

    if fill {
        let filled = channels(&mut definition)
            .map(quick_fill)
            .filter(|&filled| filled)
            .count();
        log::info!("quick-filled {filled} channels");
    }

    let generated = generate(&definition)?;
    if print_xml {
        println!("{}", generated.description());
    }

    let out = out.unwrap_or_else(|| PathBuf::from(definition.package_file_name()));
    fs::write(&out, generated.package())
        .with_context(|| format!("could not write package {}", out.display()))?;

    println!("{} -> {}", generated.summary(), out.display());
    if generated.warnings().is_empty() {
        println!("wheel references OK");
    } else {
        eprintln!("wheel reference issues, consoles may drop affected channels on import:");
        for warning in generated.warnings() {
            eprintln!("  {warning}");
        }
    }
    Ok(())
}

fn channels(
    definition: &mut FixtureDefinition,
) -> impl Iterator<Item = &mut ChannelDefinition> {
    definition
        .modes
        .iter_mut()
        .flat_map(|m| m.body_channels.iter_mut().chain(m.cell_channels.iter_mut()))
}

fn names() {
    println!("Channel names and their attributes:");
    for row in ATTRIBUTE_TABLE {
        println!("  {:<16} {}", row.key, row.attribute);
    }
    for (group, channels) in CHANNEL_CATALOGUE {
        println!("{group}:");
        for (name, fine) in channels.iter() {
            match fine {
                true => println!("  {name} (fine)"),
                false => println!("  {name}"),
            }
        }
    }
}

fn presets(channel: &str) {
    match preset_for(channel) {
        Some(ranges) => {
            for (from, to, label) in ranges {
                println!("{from:>3}-{to:>3}  {label}");
            }
        }
        None => println!("no preset for '{channel}'"),
    }
}
