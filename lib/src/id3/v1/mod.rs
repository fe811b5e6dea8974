//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! ## Genres
//!
//! ID3v1 stores the genre in a single byte. The known genres (0 to 191) are stored in
//! the [`GENRES`] constant, any other value is treated as an empty genre.
//!
//! ## Track Numbers
//!
//! ID3v1.1 stores the track number in the last byte of the comment field, preceded by
//! a zero byte. The comment is then limited to 28 bytes and there is no track total.
pub(crate) mod constants;
pub(crate) mod read;
pub(crate) mod tag;

pub use constants::{genre_name, GENRES};
pub(crate) use read::has_trailer;
pub use read::{read_from, ID3V1_SIZE};
pub use tag::Id3v1Tag;
