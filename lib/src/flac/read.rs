use std::io::{Read, Seek, SeekFrom};

use super::block::{BlockHeader, BlockType};
use super::properties::StreamInfo;
use super::FlacTag;
use crate::error::{Result, TagError};
use crate::picture::Picture;
use crate::utils::read_bytes;
use crate::vorbis::VorbisComments;

pub(crate) fn verify_flac<R>(reader: &mut R) -> Result<()>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(0))?;

    let mut marker = [0; 4];
    reader.read_exact(&mut marker)?;
    if &marker != b"fLaC" {
        return Err(TagError::FormatMismatch { expected: "fLaC" });
    }

    Ok(())
}

/// Read the metadata blocks of a FLAC stream
pub fn read_from<R>(reader: &mut R) -> Result<FlacTag>
where
    R: Read + Seek,
{
    verify_flac(reader)?;

    let mut tag = FlacTag::default();
    let mut pictures = Vec::new();

    loop {
        let offset = reader.stream_position()?;
        let header = BlockHeader::read(reader, offset)?;

        match header.ty {
            BlockType::StreamInfo => {
                let content = read_block(reader, &header)?;
                tag.stream_info = StreamInfo::from_bytes(&content)?;
            }
            BlockType::VorbisComment => {
                let content = read_block(reader, &header)?;
                tag.comments = VorbisComments::read(&content)?;
            }
            BlockType::Picture => {
                let content = read_block(reader, &header)?;
                pictures.push(Picture::from_flac_bytes(&content)?);
            }
            ty => {
                trace!("Skipping FLAC block {ty:?} ({} bytes)", header.len);
                reader.seek(SeekFrom::Current(i64::from(header.len)))?;
            }
        }

        if header.last {
            break;
        }
    }

    // PICTURE blocks come before the pictures of METADATA_BLOCK_PICTURE comments
    pictures.append(&mut tag.comments.pictures);
    tag.comments.pictures = pictures;

    Ok(tag)
}

/// Offset of the first byte after the last metadata block
pub(crate) fn audio_offset<R>(reader: &mut R) -> Result<u64>
where
    R: Read + Seek,
{
    verify_flac(reader)?;

    loop {
        let offset = reader.stream_position()?;
        let header = BlockHeader::read(reader, offset)?;
        let end = reader.seek(SeekFrom::Current(i64::from(header.len)))?;

        if header.last {
            return Ok(end);
        }
    }
}

fn read_block<R>(reader: &mut R, header: &BlockHeader) -> Result<Vec<u8>>
where
    R: Read,
{
    read_bytes(reader, header.len as usize).map_err(|_| TagError::Truncated("FLAC metadata block"))
}
