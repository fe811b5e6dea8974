//! OGG Vorbis comments
//!
//! Only the first logical stream is looked at: the identification header page, then the
//! comment header packet, which may span several pages.
mod page;
mod read;

pub use page::PageHeader;
pub use read::read_from;

use crate::types::{FileType, Format};
use crate::vorbis::{impl_vorbis_accessor, VorbisComments};

/// Vorbis comments of an OGG file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OggTag {
    pub(crate) comments: VorbisComments,
}

impl OggTag {
    pub fn comments(&self) -> &VorbisComments {
        &self.comments
    }
}

impl_vorbis_accessor!(OggTag, Format::Vorbis, FileType::Ogg);
