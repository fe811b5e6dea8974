use super::header::Id3v2Version;
use crate::error::Result;
use crate::picture::Picture;
use crate::text::{decode_text, split_terminated, TextEncoding};
use crate::types::{Comm, TagValue, Ufid};
use crate::utils::{be_uint, synchsafe, take_slice};

/// Flags of a single ID3v2.3/2.4 frame, ID3v2.2 frames have none
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
    /// Discard the frame when the tag is altered and the frame is unknown
    pub tag_alter_preservation: bool,
    /// Discard the frame when the audio is altered
    pub file_alter_preservation: bool,
    pub read_only: bool,
    /// A group identifier byte precedes the content
    pub group_identity: bool,
    pub compression: bool,
    pub encryption: bool,
    pub unsynchronisation: bool,
    /// A 4 byte synchsafe length precedes the content
    pub data_length_indicator: bool,
}

impl FrameFlags {
    /// ID3v2.3 layout: `%abc00000 %ijk00000`
    /// ID3v2.4 layout: `%0abc0000 %0h00kmnp`
    pub fn parse(flags: u16, version: Id3v2Version) -> Self {
        let set = |mask: u16| flags & mask == mask;

        match version {
            Id3v2Version::V2 => Self::default(),
            Id3v2Version::V3 => Self {
                tag_alter_preservation: set(0x8000),
                file_alter_preservation: set(0x4000),
                read_only: set(0x2000),
                compression: set(0x0080),
                encryption: set(0x0040),
                group_identity: set(0x0020),
                unsynchronisation: false,
                data_length_indicator: false,
            },
            Id3v2Version::V4 => Self {
                tag_alter_preservation: set(0x4000),
                file_alter_preservation: set(0x2000),
                read_only: set(0x1000),
                group_identity: set(0x0040),
                compression: set(0x0008),
                encryption: set(0x0004),
                unsynchronisation: set(0x0002),
                data_length_indicator: set(0x0001),
            },
        }
    }
}

/// A frame header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub name: String,
    /// Size of the frame content, excluding the header
    pub size: usize,
    pub flags: FrameFlags,
}

impl FrameHeader {
    pub fn len(version: Id3v2Version) -> usize {
        match version {
            Id3v2Version::V2 => 6,
            Id3v2Version::V3 | Id3v2Version::V4 => 10,
        }
    }

    /// Parse the frame header at the start of `data`.
    ///
    /// Returns `None` when the frames are over: not enough bytes for a header, padding,
    /// an empty name or a zero size.
    pub fn parse(data: &[u8], version: Id3v2Version) -> Option<Self> {
        let header_len = Self::len(version);
        let header = data.get(..header_len)?;

        // Assume we just started reading padding
        if header[0] == 0 {
            return None;
        }

        let (name, size, flags) = match version {
            Id3v2Version::V2 => (&header[..3], be_uint(&header[3..6]), 0),
            Id3v2Version::V3 => (
                &header[..4],
                be_uint(&header[4..8]),
                u16::from_be_bytes([header[8], header[9]]),
            ),
            Id3v2Version::V4 => (
                &header[..4],
                u64::from(synchsafe(&header[4..8])),
                u16::from_be_bytes([header[8], header[9]]),
            ),
        };

        let name = String::from_utf8_lossy(name).trim().to_string();
        if name.is_empty() || size == 0 {
            return None;
        }

        Some(Self {
            name,
            size: usize::try_from(size).unwrap_or(usize::MAX),
            flags: FrameFlags::parse(flags, version),
        })
    }
}

/// Decode the content of a frame, `None` for frames that are not decoded
pub(crate) fn decode_frame(name: &str, content: &[u8]) -> Result<Option<TagValue>> {
    let value = match name {
        "TXXX" | "TXX" => TagValue::Comment(read_user_text(content)?),
        _ if name.starts_with('T') => TagValue::Text(read_text(content)?),
        "COMM" | "USLT" | "COM" | "ULT" => TagValue::Comment(read_comm(content)?),
        "APIC" => TagValue::Picture(Picture::from_apic_bytes(content)?),
        "PIC" => TagValue::Picture(Picture::from_pic_bytes(content)?),
        "UFID" | "UFI" => TagValue::Ufid(read_ufid(content)),
        _ => return Ok(None),
    };

    Ok(Some(value))
}

/// Text frame: encoding byte followed by the encoded text
fn read_text(content: &[u8]) -> Result<String> {
    let Some((&encoding, text)) = content.split_first() else {
        return Ok(String::new());
    };

    let text = decode_text(TextEncoding::from_u8(encoding)?, text)?;
    Ok(text.replace('\0', ""))
}

/// `TXXX`: encoding, description, value
fn read_user_text(content: &[u8]) -> Result<Comm> {
    let mut data = content;
    let encoding = TextEncoding::from_u8(take_slice(&mut data, 1, "TXXX encoding")?[0])?;

    let (description, text) = split_terminated(data, encoding);

    Ok(Comm {
        language: String::new(),
        description: decode_text(encoding, description)?,
        text: decode_text(encoding, text)?.replace('\0', ""),
    })
}

/// `COMM`/`USLT`: encoding, 3 byte language, description, text
fn read_comm(content: &[u8]) -> Result<Comm> {
    let mut data = content;
    let encoding = TextEncoding::from_u8(take_slice(&mut data, 1, "comment encoding")?[0])?;
    let language = decode_text(
        TextEncoding::Latin1,
        take_slice(&mut data, 3, "comment language")?,
    )?;

    let (description, text) = split_terminated(data, encoding);

    Ok(Comm {
        language,
        description: decode_text(encoding, description)?,
        text: decode_text(encoding, text)?,
    })
}

/// `UFID`: Latin-1 owner terminated by a zero byte, then the raw identifier
fn read_ufid(content: &[u8]) -> Ufid {
    let (provider, identifier) = match content.iter().position(|&b| b == 0) {
        Some(pos) => (&content[..pos], &content[pos + 1..]),
        None => (content, &[][..]),
    };

    Ufid {
        provider: provider.iter().map(|&b| char::from(b)).collect(),
        identifier: identifier.to_vec(),
    }
}
