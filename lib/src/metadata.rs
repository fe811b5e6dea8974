//! The format independent view over decoded tags
use std::borrow::Cow;
use std::collections::HashMap;

use crate::flac::FlacTag;
use crate::id3::v1::Id3v1Tag;
use crate::id3::v2::Id3v2Tag;
use crate::mp4::Mp4Tag;
use crate::ogg::OggTag;
use crate::picture::Picture;
use crate::types::{FileType, Format, TagValue};

/// Common accessors every decoded tag provides.
///
/// Accessors never fail: a missing item is an empty string, `0`, or `None`.
pub trait Accessor {
    fn format(&self) -> Format;
    fn file_type(&self) -> FileType;
    fn title(&self) -> &str;
    fn album(&self) -> &str;
    fn artist(&self) -> &str;
    fn album_artist(&self) -> &str;
    fn composer(&self) -> &str;
    /// Genre name, numeric references are resolved where the format has them
    fn genre(&self) -> Cow<'_, str>;
    fn year(&self) -> u32;
    /// Track number and total, `0` when unknown
    fn track(&self) -> (u32, u32);
    /// Disc number and total, `0` when unknown
    fn disc(&self) -> (u32, u32);
    fn picture(&self) -> Option<&Picture>;
    fn lyrics(&self) -> &str;
    fn comment(&self) -> &str;
    /// All items by their format specific names, names differ between formats
    fn raw(&self) -> &HashMap<String, TagValue>;
}

/// Decoded tags of one stream
#[derive(Debug, Clone)]
pub enum Metadata {
    Id3v1(Id3v1Tag),
    Id3v2(Id3v2Tag),
    Mp4(Mp4Tag),
    Flac(FlacTag),
    Ogg(OggTag),
}

impl Metadata {
    fn inner(&self) -> &dyn Accessor {
        match self {
            Self::Id3v1(tag) => tag,
            Self::Id3v2(tag) => tag,
            Self::Mp4(tag) => tag,
            Self::Flac(tag) => tag,
            Self::Ogg(tag) => tag,
        }
    }
}

impl Accessor for Metadata {
    fn format(&self) -> Format {
        self.inner().format()
    }

    fn file_type(&self) -> FileType {
        self.inner().file_type()
    }

    fn title(&self) -> &str {
        self.inner().title()
    }

    fn album(&self) -> &str {
        self.inner().album()
    }

    fn artist(&self) -> &str {
        self.inner().artist()
    }

    fn album_artist(&self) -> &str {
        self.inner().album_artist()
    }

    fn composer(&self) -> &str {
        self.inner().composer()
    }

    fn genre(&self) -> Cow<'_, str> {
        self.inner().genre()
    }

    fn year(&self) -> u32 {
        self.inner().year()
    }

    fn track(&self) -> (u32, u32) {
        self.inner().track()
    }

    fn disc(&self) -> (u32, u32) {
        self.inner().disc()
    }

    fn picture(&self) -> Option<&Picture> {
        self.inner().picture()
    }

    fn lyrics(&self) -> &str {
        self.inner().lyrics()
    }

    fn comment(&self) -> &str {
        self.inner().comment()
    }

    fn raw(&self) -> &HashMap<String, TagValue> {
        self.inner().raw()
    }
}

/// Text of a raw item, empty when absent or not text
pub(crate) fn raw_text<'a>(raw: &'a HashMap<String, TagValue>, key: &str) -> &'a str {
    raw.get(key).and_then(TagValue::as_text).unwrap_or_default()
}

/// Integer of a raw item, `0` when absent or not an integer
pub(crate) fn raw_integer(raw: &HashMap<String, TagValue>, key: &str) -> u32 {
    raw.get(key).and_then(TagValue::as_integer).unwrap_or_default()
}
