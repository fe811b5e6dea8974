use std::borrow::Cow;
use std::collections::HashMap;

use crate::metadata::{raw_integer, raw_text, Accessor};
use crate::picture::Picture;
use crate::text::leading_year;
use crate::types::{FileType, Format, TagValue};

/// An ID3v1 tag
///
/// The raw map holds `title`, `artist`, `album`, `year`, `comment` and `genre` as text,
/// and `track` as an integer when the tag is ID3v1.1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Id3v1Tag {
    pub(crate) raw: HashMap<String, TagValue>,
}

impl Accessor for Id3v1Tag {
    fn format(&self) -> Format {
        Format::Id3v1
    }

    fn file_type(&self) -> FileType {
        FileType::Mp3
    }

    fn title(&self) -> &str {
        raw_text(&self.raw, "title")
    }

    fn album(&self) -> &str {
        raw_text(&self.raw, "album")
    }

    fn artist(&self) -> &str {
        raw_text(&self.raw, "artist")
    }

    fn album_artist(&self) -> &str {
        ""
    }

    fn composer(&self) -> &str {
        ""
    }

    fn genre(&self) -> Cow<'_, str> {
        Cow::Borrowed(raw_text(&self.raw, "genre"))
    }

    fn year(&self) -> u32 {
        leading_year(raw_text(&self.raw, "year"))
    }

    fn track(&self) -> (u32, u32) {
        (raw_integer(&self.raw, "track"), 0)
    }

    fn disc(&self) -> (u32, u32) {
        (0, 0)
    }

    fn picture(&self) -> Option<&Picture> {
        None
    }

    fn lyrics(&self) -> &str {
        ""
    }

    fn comment(&self) -> &str {
        raw_text(&self.raw, "comment")
    }

    fn raw(&self) -> &HashMap<String, TagValue> {
        &self.raw
    }
}
