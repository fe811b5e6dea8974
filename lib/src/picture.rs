//! Embedded pictures shared by FLAC, Vorbis comments and ID3v2
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::{Result, TagError};
use crate::text::{decode_text, split_terminated, TextEncoding};
use crate::utils::{take_slice, take_u32_be};

/// Human readable names of the picture types, indexed by their code
pub const PICTURE_TYPE_NAMES: [&str; 21] = [
    "Other",
    "32x32 pixels 'file icon' (PNG only)",
    "Other file icon",
    "Cover (front)",
    "Cover (back)",
    "Leaflet page",
    "Media (e.g. lable side of CD)",
    "Lead artist/lead performer/soloist",
    "Artist/performer",
    "Conductor",
    "Band/Orchestra",
    "Composer",
    "Lyricist/text writer",
    "Recording Location",
    "During recording",
    "During performance",
    "Movie/video screen capture",
    "A bright coloured fish",
    "Illustration",
    "Band/artist logotype",
    "Publisher/Studio logotype",
];

/// The picture type, as defined by the APIC frame and the FLAC picture block
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PictureType {
    #[default]
    Other,
    Icon,
    OtherIcon,
    CoverFront,
    CoverBack,
    Leaflet,
    Media,
    LeadArtist,
    Artist,
    Conductor,
    Band,
    Composer,
    Lyricist,
    RecordingLocation,
    DuringRecording,
    DuringPerformance,
    ScreenCapture,
    BrightFish,
    Illustration,
    BandLogo,
    PublisherLogo,
}

impl PictureType {
    const ALL: [Self; 21] = [
        Self::Other,
        Self::Icon,
        Self::OtherIcon,
        Self::CoverFront,
        Self::CoverBack,
        Self::Leaflet,
        Self::Media,
        Self::LeadArtist,
        Self::Artist,
        Self::Conductor,
        Self::Band,
        Self::Composer,
        Self::Lyricist,
        Self::RecordingLocation,
        Self::DuringRecording,
        Self::DuringPerformance,
        Self::ScreenCapture,
        Self::BrightFish,
        Self::Illustration,
        Self::BandLogo,
        Self::PublisherLogo,
    ];

    /// Get a `PictureType` from its code, must be 0-20 inclusive
    pub fn from_u32(code: u32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(TagError::InvalidPictureType(code))
    }

    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        PICTURE_TYPE_NAMES[self as usize]
    }
}

impl Display for PictureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// File extension for a MIME type, empty when unknown
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        _ => "",
    }
}

/// MIME type for an ID3v2.2 three character image format
fn mime_for_format(format: &str) -> String {
    match format.to_ascii_uppercase().as_str() {
        "JPG" => "image/jpeg".to_string(),
        "PNG" => "image/png".to_string(),
        "GIF" => "image/gif".to_string(),
        _ => String::new(),
    }
}

/// An embedded picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub(crate) extension: String,
    pub(crate) mime_type: String,
    pub(crate) picture_type: PictureType,
    pub(crate) description: String,
    pub(crate) data: Vec<u8>,
}

impl Picture {
    pub(crate) fn new(
        mime_type: String,
        picture_type: PictureType,
        description: String,
        data: Vec<u8>,
    ) -> Self {
        Self {
            extension: extension_for_mime(&mime_type).to_string(),
            mime_type,
            picture_type,
            description,
            data,
        }
    }

    /// Parse a FLAC `PICTURE` block (also used by `METADATA_BLOCK_PICTURE` comments)
    ///
    /// Layout (all integers big endian):
    ///
    /// * type (u32)
    /// * MIME type length (u32) + MIME type
    /// * description length (u32) + UTF-8 description
    /// * width, height, color depth, color count (4 x u32, ignored)
    /// * data length (u32) + data
    pub fn from_flac_bytes(bytes: &[u8]) -> Result<Self> {
        let mut data = bytes;

        let picture_type = PictureType::from_u32(take_u32_be(&mut data, "picture type")?)?;

        let mime_len = take_u32_be(&mut data, "picture MIME type")? as usize;
        let mime_type = String::from_utf8_lossy(take_slice(&mut data, mime_len, "picture MIME type")?)
            .into_owned();

        let desc_len = take_u32_be(&mut data, "picture description")? as usize;
        let description =
            String::from_utf8_lossy(take_slice(&mut data, desc_len, "picture description")?)
                .into_owned();

        // width, height, color depth, indexed color count
        take_slice(&mut data, 16, "picture dimensions")?;

        let data_len = take_u32_be(&mut data, "picture data")? as usize;
        let picture_data = take_slice(&mut data, data_len, "picture data")?.to_vec();

        Ok(Self::new(mime_type, picture_type, description, picture_data))
    }

    /// Parse the content of an ID3v2.3/2.4 `APIC` frame
    pub fn from_apic_bytes(bytes: &[u8]) -> Result<Self> {
        let mut data = bytes;
        let encoding = TextEncoding::from_u8(take_slice(&mut data, 1, "APIC encoding")?[0])?;

        let Some(mime_end) = data.iter().position(|&b| b == 0) else {
            return Err(TagError::malformed_simple(
                "APIC frame",
                "MIME type is not terminated",
            ));
        };
        let mime_type = decode_text(TextEncoding::Latin1, &data[..mime_end])?;
        data = &data[mime_end + 1..];

        Self::from_id3v2_remainder(data, encoding, mime_type)
    }

    /// Parse the content of an ID3v2.2 `PIC` frame, which uses a three character image format
    pub fn from_pic_bytes(bytes: &[u8]) -> Result<Self> {
        let mut data = bytes;
        let encoding = TextEncoding::from_u8(take_slice(&mut data, 1, "PIC encoding")?[0])?;
        let format = decode_text(TextEncoding::Latin1, take_slice(&mut data, 3, "PIC format")?)?;

        Self::from_id3v2_remainder(data, encoding, mime_for_format(&format))
    }

    fn from_id3v2_remainder(
        mut data: &[u8],
        encoding: TextEncoding,
        mime_type: String,
    ) -> Result<Self> {
        let picture_type =
            PictureType::from_u32(u32::from(take_slice(&mut data, 1, "picture type")?[0]))?;

        let (description, picture_data) = split_terminated(data, encoding);
        let description = decode_text(encoding, description)?;

        Ok(Self::new(
            mime_type,
            picture_type,
            description,
            picture_data.to_vec(),
        ))
    }

    /// File extension derived from the MIME type
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn picture_type(&self) -> PictureType {
        self.picture_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
