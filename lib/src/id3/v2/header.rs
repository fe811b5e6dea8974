use std::io::Read;

use crate::error::{ErrorPosition, Result, TagError};
use crate::types::Format;
use crate::utils::{get_bit, synchsafe};

/// The ID3v2 version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id3v2Version {
    /// ID3v2.2
    V2,
    /// ID3v2.3
    V3,
    /// ID3v2.4
    V4,
}

impl From<Id3v2Version> for Format {
    fn from(version: Id3v2Version) -> Self {
        match version {
            Id3v2Version::V2 => Format::Id3v2_2,
            Id3v2Version::V3 => Format::Id3v2_3,
            Id3v2Version::V4 => Format::Id3v2_4,
        }
    }
}

/// The 10 byte header at the start of an ID3v2 tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2Header {
    pub version: Id3v2Version,
    /// Whether or not all frames are unsynchronised
    pub unsynchronisation: bool,
    /// An extended header follows (ID3v2.3/2.4). In ID3v2.2 the same bit marks compression.
    pub extended_header: bool,
    pub experimental: bool,
    /// A 10 byte footer follows the tag body (ID3v2.4 only)
    pub footer: bool,
    /// Size of the tag body, excluding the header and footer
    pub size: u32,
}

impl Id3v2Header {
    /// Total size of the tag envelope including header and footer
    pub fn tag_len(&self) -> u64 {
        let footer = if self.footer { 10 } else { 0 };
        10 + u64::from(self.size) + footer
    }
}

pub fn read_header<R>(reader: &mut R) -> Result<Id3v2Header>
where
    R: Read,
{
    let mut header = [0; 10];
    reader.read_exact(&mut header)?;

    if &header[..3] != b"ID3" {
        return Err(TagError::FormatMismatch { expected: "ID3v2" });
    }

    // Version is stored as [major, minor], the minor revision is not needed
    let version = match header[3] {
        2 => Id3v2Version::V2,
        3 => Id3v2Version::V3,
        4 => Id3v2Version::V4,
        major => {
            return Err(TagError::malformed(
                "ID3v2 header",
                format!("unsupported version 2.{major}.{}", header[4]),
                ErrorPosition::new(3),
            ))
        }
    };

    let flags = header[5];
    let modern = version != Id3v2Version::V2;

    Ok(Id3v2Header {
        version,
        unsynchronisation: get_bit(flags, 7),
        extended_header: get_bit(flags, 6),
        experimental: modern && get_bit(flags, 5),
        footer: version == Id3v2Version::V4 && get_bit(flags, 4),
        size: synchsafe(&header[6..10]),
    })
}

/// Length of the extended header at the start of `body`, including its size field
pub(crate) fn extended_header_len(body: &[u8], version: Id3v2Version) -> Result<usize> {
    let Some(size) = body.get(..4) else {
        return Err(TagError::Truncated("ID3v2 extended header"));
    };

    let len = match version {
        // Size excludes the 4 byte size field itself
        Id3v2Version::V3 => {
            (u32::from_be_bytes([size[0], size[1], size[2], size[3]]) as usize).saturating_add(4)
        }
        Id3v2Version::V4 => {
            let len = synchsafe(size) as usize;
            if len < 6 {
                return Err(TagError::malformed(
                    "ID3v2 extended header",
                    format!("invalid size {len} (< 6)"),
                    ErrorPosition::new(10),
                ));
            }
            len
        }
        Id3v2Version::V2 => 0,
    };

    if len > body.len() {
        return Err(TagError::Truncated("ID3v2 extended header"));
    }

    Ok(len)
}
