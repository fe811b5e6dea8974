#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::correctness)]
#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod checksum;
pub mod config;
pub mod error;
pub mod flac;
pub mod id3;
pub mod metadata;
pub mod mp3;
pub mod mp4;
pub mod musicbrainz;
pub mod ogg;
pub mod picture;
pub mod probe;
pub mod text;
pub mod types;
pub mod utils;
pub mod vorbis;

pub use checksum::{hash, sum};
pub use config::{ReadOptions, ScanMode};
pub use error::{ErrorKind, Result, TagError};
pub use metadata::{Accessor, Metadata};
pub use picture::{Picture, PictureType};
pub use probe::{identify, read_from, read_from_with};
pub use types::{Comm, FileType, Format, TagValue, Ufid};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
extern crate log;
