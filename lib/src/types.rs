use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::picture::Picture;

/// The tag dialect a [`Metadata`](crate::Metadata) was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Id3v1,
    Id3v2_2,
    Id3v2_3,
    Id3v2_4,
    Mp4,
    /// Vorbis comments inside an OGG container
    Vorbis,
    Flac,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Id3v1 => "ID3v1",
            Self::Id3v2_2 => "ID3v2.2",
            Self::Id3v2_3 => "ID3v2.3",
            Self::Id3v2_4 => "ID3v2.4",
            Self::Mp4 => "MP4",
            Self::Vorbis => "VORBIS",
            Self::Flac => "FLAC",
        };
        write!(f, "{name}")
    }
}

/// The kind of audio carried next to the tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    Mp3,
    Aac,
    Alac,
    Flac,
    Ogg,
    #[default]
    Unknown,
}

impl Display for FileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Mp3 => "MP3",
            Self::Aac => "AAC",
            Self::Alac => "ALAC",
            Self::Flac => "FLAC",
            Self::Ogg => "OGG",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// A value in the raw tag map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    Integer(u32),
    Picture(Picture),
    Comment(Comm),
    Ufid(Ufid),
}

impl TagValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u32> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for TagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Picture(picture) => write!(
                f,
                "Picture{{Ext: {}, MIMEType: {}, Type: {}, Description: {}, Data.Size: {}}}",
                picture.extension(),
                picture.mime_type(),
                picture.picture_type(),
                picture.description(),
                picture.data().len()
            ),
            Self::Comment(comm) => write!(
                f,
                "Language: {}, Description: {}, Text: {}",
                comm.language, comm.description, comm.text
            ),
            Self::Ufid(ufid) => write!(f, "{}: {}", ufid.provider, ufid.identifier_text()),
        }
    }
}

/// A comment, lyrics or user text frame
///
/// ID3v2.3 writers usually fill `text` and leave `description` empty, ID3v2.4 writers
/// tend to use `description`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Comm {
    /// ISO-639-2 language code, empty for user text frames
    pub language: String,
    pub description: String,
    pub text: String,
}

/// A unique file identifier (`UFID`/`UFI`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ufid {
    /// Owner of the identifier, usually a URL
    pub provider: String,
    pub identifier: Vec<u8>,
}

impl Ufid {
    /// The identifier as lossy UTF-8
    pub fn identifier_text(&self) -> String {
        String::from_utf8_lossy(&self.identifier).into_owned()
    }
}
