use std::borrow::Cow;
use std::collections::HashMap;

use super::genre::expand_genre;
use super::header::{Id3v2Header, Id3v2Version};
use crate::metadata::{raw_text, Accessor};
use crate::picture::Picture;
use crate::text::{leading_year, parse_x_of_n, trim_padding};
use crate::types::{Comm, FileType, Format, TagValue};

/// Items that have a frame in every ID3v2 version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Title,
    Artist,
    Album,
    AlbumArtist,
    Composer,
    Year,
    Track,
    Disc,
    Genre,
    Picture,
    Lyrics,
    Comment,
}

impl Item {
    fn frame_name(self, version: Id3v2Version) -> &'static str {
        let (v2, v3) = match self {
            Item::Title => ("TT2", "TIT2"),
            Item::Artist => ("TP1", "TPE1"),
            Item::Album => ("TAL", "TALB"),
            Item::AlbumArtist => ("TP2", "TPE2"),
            Item::Composer => ("TCM", "TCOM"),
            Item::Year => ("TYE", "TYER"),
            Item::Track => ("TRK", "TRCK"),
            Item::Disc => ("TPA", "TPOS"),
            Item::Genre => ("TCO", "TCON"),
            Item::Picture => ("PIC", "APIC"),
            Item::Lyrics => ("ULT", "USLT"),
            Item::Comment => ("COM", "COMM"),
        };

        match version {
            Id3v2Version::V2 => v2,
            Id3v2Version::V4 if self == Item::Year => "TDRC",
            Id3v2Version::V3 | Id3v2Version::V4 => v3,
        }
    }
}

/// An ID3v2 tag
///
/// The raw map is keyed by frame name. Repeated frames get a numeric suffix, so a
/// second `COMM` frame is stored as `COMM_0`, a third as `COMM_1`.
///
/// When the MP3 stream behind the tag could be analyzed, the map also holds
/// `stream_type`, `stream_bitrate`, `stream_audio`, `stream_size` and `stream_length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3v2Tag {
    pub(crate) header: Id3v2Header,
    pub(crate) raw: HashMap<String, TagValue>,
}

impl Id3v2Tag {
    pub fn header(&self) -> &Id3v2Header {
        &self.header
    }

    pub fn version(&self) -> Id3v2Version {
        self.header.version
    }

    fn frame(&self, item: Item) -> Option<&TagValue> {
        self.raw.get(item.frame_name(self.header.version))
    }

    fn text(&self, item: Item) -> &str {
        raw_text(&self.raw, item.frame_name(self.header.version))
    }

    fn comm(&self, item: Item) -> Option<&Comm> {
        match self.frame(item) {
            Some(TagValue::Comment(comm)) => Some(comm),
            _ => None,
        }
    }
}

impl Accessor for Id3v2Tag {
    fn format(&self) -> Format {
        self.header.version.into()
    }

    fn file_type(&self) -> FileType {
        FileType::Mp3
    }

    fn title(&self) -> &str {
        self.text(Item::Title)
    }

    fn album(&self) -> &str {
        self.text(Item::Album)
    }

    fn artist(&self) -> &str {
        self.text(Item::Artist)
    }

    fn album_artist(&self) -> &str {
        self.text(Item::AlbumArtist)
    }

    fn composer(&self) -> &str {
        self.text(Item::Composer)
    }

    fn genre(&self) -> Cow<'_, str> {
        Cow::Owned(expand_genre(self.text(Item::Genre)))
    }

    fn year(&self) -> u32 {
        leading_year(self.text(Item::Year))
    }

    fn track(&self) -> (u32, u32) {
        parse_x_of_n(self.text(Item::Track))
    }

    fn disc(&self) -> (u32, u32) {
        parse_x_of_n(self.text(Item::Disc))
    }

    fn picture(&self) -> Option<&Picture> {
        match self.frame(Item::Picture) {
            Some(TagValue::Picture(picture)) => Some(picture),
            _ => None,
        }
    }

    fn lyrics(&self) -> &str {
        self.comm(Item::Lyrics)
            .map(|comm| comm.text.as_str())
            .unwrap_or_default()
    }

    fn comment(&self) -> &str {
        match self.comm(Item::Comment) {
            Some(comm) if !comm.description.is_empty() => trim_padding(&comm.description),
            Some(comm) => trim_padding(&comm.text),
            None => "",
        }
    }

    fn raw(&self) -> &HashMap<String, TagValue> {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tag(version: Id3v2Version, frames: &[(&str, TagValue)]) -> Id3v2Tag {
        Id3v2Tag {
            header: Id3v2Header {
                version,
                unsynchronisation: false,
                extended_header: false,
                experimental: false,
                footer: false,
                size: 0,
            },
            raw: frames
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_frame_names_per_version() {
        let text = |s: &str| TagValue::Text(s.to_string());

        let v2 = tag(
            Id3v2Version::V2,
            &[("TT2", text("Title")), ("TYE", text("1999")), ("TRK", text("3/9"))],
        );
        assert_eq!(v2.title(), "Title");
        assert_eq!(v2.year(), 1999);
        assert_eq!(v2.track(), (3, 9));
        assert_eq!(v2.format(), Format::Id3v2_2);

        let v3 = tag(Id3v2Version::V3, &[("TYER", text("2001")), ("TDRC", text("1990"))]);
        assert_eq!(v3.year(), 2001);

        let v4 = tag(
            Id3v2Version::V4,
            &[("TDRC", text("2010-04-01")), ("TCON", text("(17)Test")), ("TPOS", text("1/2"))],
        );
        assert_eq!(v4.year(), 2010);
        assert_eq!(v4.genre(), "Rock Test");
        assert_eq!(v4.disc(), (1, 2));
        assert_eq!(v4.title(), "");
        assert!(v4.picture().is_none());
    }

    #[test]
    fn test_comment_and_lyrics() {
        let comm = |description: &str, text: &str| {
            TagValue::Comment(Comm {
                language: "eng".to_string(),
                description: description.to_string(),
                text: text.to_string(),
            })
        };

        let v3 = tag(
            Id3v2Version::V3,
            &[("COMM", comm("", " text only ")), ("USLT", comm("", "la la la"))],
        );
        assert_eq!(v3.comment(), "text only");
        assert_eq!(v3.lyrics(), "la la la");

        let v4 = tag(Id3v2Version::V4, &[("COMM", comm("described", "ignored"))]);
        assert_eq!(v4.comment(), "described");
        assert_eq!(v4.lyrics(), "");
    }
}
