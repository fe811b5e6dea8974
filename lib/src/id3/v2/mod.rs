//! ID3v2 items and utilities
//!
//! # ID3v2 notes
//!
//! ## Frame sizes
//!
//! The tag size in the header is always synchsafe. Frame sizes are synchsafe in ID3v2.4
//! only, ID3v2.2 and ID3v2.3 store them as plain big endian integers.
//!
//! ## Unsynchronisation
//!
//! When the header flags the whole tag as unsynchronised, the body is decoded before any
//! frame is read. Frames that carry their own unsynchronisation, compression or encryption
//! flag are skipped and logged.
//!
//! ## Raw items
//!
//! Text frames (`T***`) are stored as text, `COMM`/`USLT`/`TXXX` as [`Comm`](crate::Comm),
//! `APIC`/`PIC` as [`Picture`](crate::Picture) and `UFID` as [`Ufid`](crate::Ufid). Other
//! frames are ignored.
mod frame;
mod genre;
mod header;
mod read;
mod tag;
mod unsynch;

pub use frame::{FrameFlags, FrameHeader};
pub use genre::expand_genre;
pub use header::{read_header, Id3v2Header, Id3v2Version};
pub use read::read_from;
pub use tag::Id3v2Tag;
pub use unsynch::Unsynchroniser;
