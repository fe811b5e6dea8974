//! Format detection and dispatch to the decoders
use std::io::{Read, Seek, SeekFrom};

use crate::config::ReadOptions;
use crate::error::{Result, TagError};
use crate::id3::{v1, v2};
use crate::metadata::Metadata;
use crate::types::{FileType, Format};
use crate::{flac, mp4, ogg};

/// Bytes needed to tell all supported formats apart
const SIGNATURE_LEN: usize = 11;

/// The tag envelope announced by the first bytes of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Envelope {
    Flac,
    Ogg,
    Mp4,
    Id3v2,
    /// Possibly an ID3v1 trailer
    Unknown,
}

/// Look at the first [`SIGNATURE_LEN`] bytes, leaving the position where it was
pub(crate) fn sniff<R>(reader: &mut R) -> Result<Envelope>
where
    R: Read + Seek,
{
    let pos = reader.stream_position()?;
    reader.seek(SeekFrom::Start(0))?;

    let mut signature = [0; SIGNATURE_LEN];
    let read = reader.read_exact(&mut signature);
    reader.seek(SeekFrom::Start(pos))?;
    read.map_err(|_| TagError::Truncated("format signature"))?;

    let envelope = match signature {
        [b'f', b'L', b'a', b'C', ..] => Envelope::Flac,
        [b'O', b'g', b'g', b'S', ..] => Envelope::Ogg,
        [_, _, _, _, b'f', b't', b'y', b'p', b'M', b'4', b'A'] => Envelope::Mp4,
        [b'I', b'D', b'3', ..] => Envelope::Id3v2,
        _ => Envelope::Unknown,
    };
    trace!("Detected envelope {envelope:?}");

    Ok(envelope)
}

/// Read the tags of a stream with the default [`ReadOptions`]
///
/// # Errors
///
/// [`TagError::NoTagsFound`] when none of the supported formats is found, otherwise the
/// first error of the decoder.
pub fn read_from<R>(reader: &mut R) -> Result<Metadata>
where
    R: Read + Seek,
{
    read_from_with(reader, &ReadOptions::default())
}

/// Read the tags of a stream, picking the decoder from the first bytes
pub fn read_from_with<R>(reader: &mut R, options: &ReadOptions) -> Result<Metadata>
where
    R: Read + Seek,
{
    let metadata = match sniff(reader)? {
        Envelope::Flac => Metadata::Flac(flac::read_from(reader)?),
        Envelope::Ogg => Metadata::Ogg(ogg::read_from(reader)?),
        Envelope::Mp4 => Metadata::Mp4(mp4::read_from(reader, options)?),
        Envelope::Id3v2 => Metadata::Id3v2(v2::read_from(reader, options)?),
        Envelope::Unknown => match v1::read_from(reader) {
            Ok(tag) => Metadata::Id3v1(tag),
            Err(TagError::NotId3v1) => return Err(TagError::NoTagsFound),
            Err(e) => return Err(e),
        },
    };

    Ok(metadata)
}

/// Detect the tag format without decoding the tags.
///
/// The file type of MP4 files is [`FileType::Unknown`], the codec is only known after
/// walking the track atoms. The position of `reader` is restored.
pub fn identify<R>(reader: &mut R) -> Result<(Format, FileType)>
where
    R: Read + Seek,
{
    let pos = reader.stream_position()?;
    let result = identify_inner(reader);
    reader.seek(SeekFrom::Start(pos))?;

    result
}

fn identify_inner<R>(reader: &mut R) -> Result<(Format, FileType)>
where
    R: Read + Seek,
{
    match sniff(reader)? {
        Envelope::Flac => Ok((Format::Flac, FileType::Flac)),
        Envelope::Ogg => Ok((Format::Vorbis, FileType::Ogg)),
        Envelope::Mp4 => Ok((Format::Mp4, FileType::Unknown)),
        Envelope::Id3v2 => {
            reader.seek(SeekFrom::Start(0))?;
            let header = v2::read_header(reader)?;
            Ok((header.version.into(), FileType::Mp3))
        }
        Envelope::Unknown => {
            if v1::has_trailer(reader)? {
                Ok((Format::Id3v1, FileType::Mp3))
            } else {
                Err(TagError::NoTagsFound)
            }
        }
    }
}
