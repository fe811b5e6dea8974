//! FLAC metadata blocks
//!
//! Only the `STREAMINFO`, `VORBIS_COMMENT` and `PICTURE` blocks are decoded, every other
//! block is skipped.
mod block;
mod properties;
mod read;

pub use block::{BlockHeader, BlockType};
pub use properties::StreamInfo;
pub use read::read_from;
pub(crate) use read::audio_offset;

use crate::picture::Picture;
use crate::types::{FileType, Format};
use crate::vorbis::{impl_vorbis_accessor, VorbisComments};

/// Tags and stream information of a FLAC file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlacTag {
    pub(crate) comments: VorbisComments,
    pub(crate) stream_info: StreamInfo,
}

impl FlacTag {
    pub fn comments(&self) -> &VorbisComments {
        &self.comments
    }

    pub fn stream_info(&self) -> &StreamInfo {
        &self.stream_info
    }

    /// Every embedded picture, `PICTURE` blocks first
    pub fn pictures(&self) -> &[Picture] {
        self.comments.pictures()
    }
}

impl_vorbis_accessor!(FlacTag, Format::Flac, FileType::Flac);
