#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::correctness)]
#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
mod check;
mod cli;
mod config;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use config::Settings;
use tagscanlib::{musicbrainz, Accessor, Metadata, ScanMode, TagValue};

#[macro_use]
extern crate log;

fn main() -> Result<()> {
    lovely_env_logger::init_default();

    let args = cli::Args::parse();
    let config = get_config(&args);

    match args.action {
        cli::Action::Read { file, raw, mb } => {
            let metadata = tagscanlib::read_from_with(&mut open(&file)?, &config.read)
                .with_context(|| format!("reading {}", file.display()))?;
            print_metadata(&metadata);
            if raw {
                print_raw(&metadata);
            }
            if mb {
                let info = serde_json::to_string_pretty(&musicbrainz::extract(&metadata))?;
                println!("\nMusicBrainz Info:\n{info}");
            }
        }
        cli::Action::Identify { file } => {
            let (format, file_type) = tagscanlib::identify(&mut open(&file)?)
                .with_context(|| format!("identifying {}", file.display()))?;
            println!("Metadata Format: {format}");
            println!("File Type: {file_type}");
        }
        cli::Action::Sum { file } => {
            let digest = tagscanlib::sum(&mut open(&file)?)
                .with_context(|| format!("hashing {}", file.display()))?;
            println!("{digest}");
        }
        cli::Action::Check { dir, sum } => {
            let report = check::run(&dir, &config.check, &config.read, sum);
            print!("{report}");
        }
    }

    Ok(())
}

/// Settings from the config file, overridden by the command line
fn get_config(args: &cli::Args) -> Settings {
    let loaded = match &args.config {
        Some(path) => Settings::from_file(path),
        None => Settings::from_config_path(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        warn!("Using the default settings: {e:#}");
        Settings::default()
    });

    if args.exhaustive {
        config.read.scan_mode = ScanMode::Exhaustive;
    }

    config
}

pub fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn print_metadata(metadata: &Metadata) {
    println!("Metadata Format: {}", metadata.format());
    println!("File Type: {}", metadata.file_type());

    println!(" Title: {}", metadata.title());
    println!(" Album: {}", metadata.album());
    println!(" Artist: {}", metadata.artist());
    println!(" Album Artist: {}", metadata.album_artist());
    println!(" Composer: {}", metadata.composer());
    println!(" Genre: {}", metadata.genre());
    println!(" Year: {}", metadata.year());

    let (track, track_count) = metadata.track();
    println!(" Track: {track} of {track_count}");

    let (disc, disc_count) = metadata.disc();
    println!(" Disc: {disc} of {disc_count}");

    match metadata.picture() {
        Some(picture) => println!(" Picture: {}", TagValue::Picture(picture.clone())),
        None => println!(" Picture: none"),
    }
    println!(" Lyrics: {}", metadata.lyrics());
    println!(" Comment: {}", metadata.comment());
}

fn print_raw(metadata: &Metadata) {
    println!("\n");

    let mut items: Vec<_> = metadata.raw().iter().collect();
    items.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (key, value) in items {
        println!("{key:?}: {value}");
    }
}
