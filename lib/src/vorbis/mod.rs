//! Vorbis comments, shared by FLAC and OGG Vorbis
//!
//! Keys are case insensitive, so they are folded to lowercase. When a key appears more
//! than once the last value wins. The vendor string is kept apart from the comments.
use std::collections::HashMap;

use base64::{engine::general_purpose, Engine as _};
use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Result, TagError};
use crate::metadata::raw_text;
use crate::picture::Picture;
use crate::text::{leading_year, parse_x_of_n};
use crate::types::TagValue;
use crate::utils::read_bytes;

/// Key of base64 encoded FLAC picture blocks
const PICTURE_KEY: &str = "metadata_block_picture";

/// Decoded vorbis comments and the pictures found next to them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VorbisComments {
    pub(crate) vendor: String,
    pub(crate) raw: HashMap<String, TagValue>,
    pub(crate) pictures: Vec<Picture>,
}

impl VorbisComments {
    /// Read a comment block:
    ///
    /// * vendor length (u32 LE) + vendor string
    /// * comment count (u32 LE)
    /// * per comment: length (u32 LE) + `KEY=value`
    pub fn read(mut data: &[u8]) -> Result<Self> {
        let mut comments = Self::default();

        let vendor_len = data.read_u32::<LittleEndian>()?;
        let vendor = read_bytes(&mut data, vendor_len as usize)?;
        comments.vendor = String::from_utf8_lossy(&vendor).into_owned();

        let count = data.read_u32::<LittleEndian>()?;
        for _ in 0..count {
            let len = data.read_u32::<LittleEndian>()?;
            let comment = read_bytes(&mut data, len as usize)?;
            let comment = String::from_utf8_lossy(&comment);

            let Some((key, value)) = comment.split_once('=') else {
                return Err(TagError::MalformedComment);
            };
            let key = key.to_lowercase();

            if key == PICTURE_KEY {
                let block = general_purpose::STANDARD.decode(value.trim()).map_err(|e| {
                    TagError::malformed_simple("METADATA_BLOCK_PICTURE comment", e.to_string())
                })?;
                comments.pictures.push(Picture::from_flac_bytes(&block)?);
                continue;
            }

            comments.raw.insert(key, TagValue::Text(value.to_string()));
        }

        Ok(comments)
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Get the value of a comment, keys are lowercase
    pub fn get(&self, key: &str) -> &str {
        raw_text(&self.raw, key)
    }

    /// The first non-empty value among `keys`
    fn first_of(&self, keys: &[&str]) -> &str {
        keys.iter()
            .map(|key| self.get(key))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub(crate) fn title(&self) -> &str {
        self.get("title")
    }

    pub(crate) fn album(&self) -> &str {
        self.get("album")
    }

    /// `PERFORMER` is who performed the work, `ARTIST` who is responsible for it
    pub(crate) fn artist(&self) -> &str {
        self.first_of(&["performer", "artist"])
    }

    pub(crate) fn album_artist(&self) -> &str {
        self.get("albumartist")
    }

    /// For classical music `ARTIST` is the composer, as long as a performer is named
    pub(crate) fn composer(&self) -> &str {
        let composer = self.get("composer");
        if !composer.is_empty() || self.get("performer").is_empty() {
            return composer;
        }
        self.get("artist")
    }

    pub(crate) fn genre(&self) -> &str {
        self.get("genre")
    }

    pub(crate) fn year(&self) -> u32 {
        match leading_year(self.get("date")) {
            0 => leading_year(self.get("year")),
            year => year,
        }
    }

    pub(crate) fn track(&self) -> (u32, u32) {
        self.x_of_n("tracknumber", &["tracktotal", "totaltracks"])
    }

    pub(crate) fn disc(&self) -> (u32, u32) {
        self.x_of_n("discnumber", &["disctotal", "totaldiscs"])
    }

    fn x_of_n(&self, number_key: &str, total_keys: &[&str]) -> (u32, u32) {
        let (number, total) = parse_x_of_n(self.get(number_key));
        if total != 0 {
            return (number, total);
        }
        (number, parse_x_of_n(self.first_of(total_keys)).0)
    }

    pub(crate) fn picture(&self) -> Option<&Picture> {
        self.pictures.first()
    }

    pub(crate) fn lyrics(&self) -> &str {
        self.get("lyrics")
    }

    pub(crate) fn comment(&self) -> &str {
        self.first_of(&["comment", "description"])
    }
}

/// Implement [`Accessor`](crate::Accessor) for a tag that keeps its vorbis comments in
/// a `comments` field
macro_rules! impl_vorbis_accessor {
    ($tag:ty, $format:expr, $file_type:expr) => {
        impl $crate::metadata::Accessor for $tag {
            fn format(&self) -> $crate::types::Format {
                $format
            }

            fn file_type(&self) -> $crate::types::FileType {
                $file_type
            }

            fn title(&self) -> &str {
                self.comments.title()
            }

            fn album(&self) -> &str {
                self.comments.album()
            }

            fn artist(&self) -> &str {
                self.comments.artist()
            }

            fn album_artist(&self) -> &str {
                self.comments.album_artist()
            }

            fn composer(&self) -> &str {
                self.comments.composer()
            }

            fn genre(&self) -> std::borrow::Cow<'_, str> {
                std::borrow::Cow::Borrowed(self.comments.genre())
            }

            fn year(&self) -> u32 {
                self.comments.year()
            }

            fn track(&self) -> (u32, u32) {
                self.comments.track()
            }

            fn disc(&self) -> (u32, u32) {
                self.comments.disc()
            }

            fn picture(&self) -> Option<&$crate::picture::Picture> {
                self.comments.picture()
            }

            fn lyrics(&self) -> &str {
                self.comments.lyrics()
            }

            fn comment(&self) -> &str {
                self.comments.comment()
            }

            fn raw(&self) -> &std::collections::HashMap<String, $crate::types::TagValue> {
                &self.comments.raw
            }
        }
    };
}

pub(crate) use impl_vorbis_accessor;
