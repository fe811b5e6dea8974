use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{ErrorPosition, Result, TagError};
use crate::utils::clear_bit;

/// FLAC metadata block types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    StreamInfo,
    Padding,
    Application,
    SeekTable,
    VorbisComment,
    CueSheet,
    Picture,
    /// Types 7 to 126
    Reserved(u8),
}

impl BlockType {
    fn from_u8(ty: u8, offset: u64) -> Result<Self> {
        Ok(match ty {
            0 => Self::StreamInfo,
            1 => Self::Padding,
            2 => Self::Application,
            3 => Self::SeekTable,
            4 => Self::VorbisComment,
            5 => Self::CueSheet,
            6 => Self::Picture,
            7..=126 => Self::Reserved(ty),
            _ => {
                return Err(TagError::malformed(
                    "FLAC metadata block",
                    "invalid block type 127",
                    ErrorPosition::new(offset),
                ))
            }
        })
    }
}

/// The 4 byte header in front of every metadata block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub last: bool,
    pub ty: BlockType,
    /// Length of the block content, header excluded
    pub len: u32,
}

impl BlockHeader {
    /// Read a block header, `offset` is only used for error reporting
    pub(crate) fn read<R>(reader: &mut R, offset: u64) -> Result<Self>
    where
        R: Read,
    {
        let byte = reader
            .read_u8()
            .map_err(|_| TagError::Truncated("FLAC block header"))?;
        let last = byte & 0x80 != 0;
        let ty = BlockType::from_u8(clear_bit(byte, 7), offset)?;

        #[allow(clippy::cast_possible_truncation)]
        let len = reader
            .read_uint::<BigEndian>(3)
            .map_err(|_| TagError::Truncated("FLAC block header"))? as u32;

        Ok(Self { last, ty, len })
    }
}
