use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(name = "tagscan", author, version, about, long_about=None)] // Read from `Cargo.toml`
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
    /// Walk every MP3 frame instead of sampling the start of the stream
    #[arg(short, long, global = true)]
    pub exhaustive: bool,
    /// Use this config file instead of `~/.config/tagscan/config.toml`
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Print the tags of a file.
    Read {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Also print every raw item
        #[arg(long)]
        raw: bool,
        /// Also print the MusicBrainz identifiers as JSON
        #[arg(long)]
        mb: bool,
    },
    /// Print the tag format and file type without decoding the tags.
    Identify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the checksum of the audio data, which does not change when the tags do.
    Sum {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Read every file below DIR and report the decoding errors.
    Check {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        /// Checksum every file and report audio shared by several files
        #[arg(long)]
        sum: bool,
    },
}
