//! MP4 (M4A) atoms
//!
//! The atom tree is walked down through `moov`, `udta`, `meta` and `ilst`, reading every
//! known item. `trak` is followed as well to find the codec of the audio track.
mod atom_info;
mod genres;
mod read;

pub use genres::itunes_genre;
pub use read::read_from;

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};

use self::atom_info::AtomInfo;
use crate::error::{Result, TagError};
use crate::id3::v1::genre_name;
use crate::metadata::{raw_integer, raw_text, Accessor};
use crate::picture::Picture;
use crate::text::leading_year;
use crate::types::{FileType, Format, TagValue};

/// Items of an MP4 file, keyed by atom name (`©nam`, `trkn`, ...) or by the name of a
/// `com.apple.iTunes` freeform atom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mp4Tag {
    pub(crate) raw: HashMap<String, TagValue>,
    pub(crate) file_type: FileType,
}

impl Accessor for Mp4Tag {
    fn format(&self) -> Format {
        Format::Mp4
    }

    fn file_type(&self) -> FileType {
        self.file_type
    }

    fn title(&self) -> &str {
        raw_text(&self.raw, "©nam")
    }

    fn album(&self) -> &str {
        raw_text(&self.raw, "©alb")
    }

    fn artist(&self) -> &str {
        match raw_text(&self.raw, "©ART") {
            "" => raw_text(&self.raw, "©art"),
            artist => artist,
        }
    }

    fn album_artist(&self) -> &str {
        raw_text(&self.raw, "aART")
    }

    fn composer(&self) -> &str {
        raw_text(&self.raw, "©wrt")
    }

    /// `©gen`, then the iTunes Store genre in `geID`, then the ID3v1 genre in `gnre`
    fn genre(&self) -> Cow<'_, str> {
        let genre = raw_text(&self.raw, "©gen");
        if !genre.is_empty() {
            return Cow::Borrowed(genre);
        }

        let genre = match raw_integer(&self.raw, "geID") {
            0 => match raw_integer(&self.raw, "gnre") {
                0 => "",
                id => genre_name(id as usize - 1),
            },
            id => itunes_genre(id),
        };
        Cow::Borrowed(genre)
    }

    fn year(&self) -> u32 {
        leading_year(raw_text(&self.raw, "©day"))
    }

    fn track(&self) -> (u32, u32) {
        (
            raw_integer(&self.raw, "trkn"),
            raw_integer(&self.raw, "trkn_count"),
        )
    }

    fn disc(&self) -> (u32, u32) {
        (
            raw_integer(&self.raw, "disk"),
            raw_integer(&self.raw, "disk_count"),
        )
    }

    fn picture(&self) -> Option<&Picture> {
        match self.raw.get("covr") {
            Some(TagValue::Picture(picture)) => Some(picture),
            _ => None,
        }
    }

    fn lyrics(&self) -> &str {
        raw_text(&self.raw, "©lyr")
    }

    fn comment(&self) -> &str {
        raw_text(&self.raw, "©cmt")
    }

    fn raw(&self) -> &HashMap<String, TagValue> {
        &self.raw
    }
}

/// Offset and length of the `mdat` content, looked up among the top level atoms
pub(crate) fn mdat_range<R>(reader: &mut R) -> Result<(u64, u64)>
where
    R: Read + Seek,
{
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    while end.saturating_sub(reader.stream_position()?) >= 8 {
        let atom = AtomInfo::read(reader, end)?;
        if &atom.ident == b"mdat" {
            return Ok((atom.start + atom.header_len, atom.content_len()));
        }

        reader.seek(SeekFrom::Start(atom.end()))?;
    }

    Err(TagError::malformed_simple(
        "MP4 file",
        "reached the end of the file before the audio data",
    ))
}
