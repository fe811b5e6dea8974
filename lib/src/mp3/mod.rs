//! MPEG audio frame analysis
//!
//! Only the frame headers are inspected, no audio is decoded. The analyzer provides the
//! `stream_*` items of ID3v2 tags.
mod analyze;
pub(crate) mod constants;
mod header;

pub use analyze::{analyze, Mp3Info};
pub use header::{ChannelMode, FrameHeader, Layer, MpegVersion};
