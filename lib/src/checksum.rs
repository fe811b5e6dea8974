//! A SHA-1 digest of the audio data that does not change when the tags do
use std::io::{self, Read, Seek, SeekFrom};

use sha1::{Digest, Sha1};

use crate::error::{Result, TagError};
use crate::id3::v1::{has_trailer, ID3V1_SIZE};
use crate::id3::v2::read_header;
use crate::probe::{sniff, Envelope};
use crate::{flac, mp4};

/// Compute a lowercase hex SHA-1 over the audio data of a stream, leaving out the tags.
///
/// The hashed region depends on the envelope:
///
/// * MP4: the content of the `mdat` atom
/// * FLAC: everything after the last metadata block
/// * ID3v2: everything after the tag, up to an ID3v1 trailer if there is one
/// * ID3v1: everything up to the trailer
/// * anything else: the whole stream
pub fn sum<R>(reader: &mut R) -> Result<String>
where
    R: Read + Seek,
{
    let (start, len) = match sniff(reader)? {
        Envelope::Mp4 => mp4::mdat_range(reader)?,
        Envelope::Flac => {
            let start = flac::audio_offset(reader)?;
            let end = stream_len(reader)?;
            if start > end {
                return Err(TagError::Truncated("FLAC metadata block"));
            }
            (start, end - start)
        }
        Envelope::Id3v2 => {
            reader.seek(SeekFrom::Start(0))?;
            let start = read_header(reader)?.tag_len();
            let end = audio_end(reader)?;
            if start > end {
                return Err(TagError::Truncated("ID3v2 tag"));
            }
            (start, end - start)
        }
        Envelope::Ogg | Envelope::Unknown => (0, audio_end(reader)?),
    };

    trace!("Hashing {len} bytes from offset {start}");
    hash_region(reader, start, len)
}

/// The same digest as [`sum`]
pub fn hash<R>(reader: &mut R) -> Result<String>
where
    R: Read + Seek,
{
    sum(reader)
}

fn stream_len<R>(reader: &mut R) -> Result<u64>
where
    R: Seek,
{
    Ok(reader.seek(SeekFrom::End(0))?)
}

/// End of the stream, minus the ID3v1 trailer if there is one
fn audio_end<R>(reader: &mut R) -> Result<u64>
where
    R: Read + Seek,
{
    let len = stream_len(reader)?;
    if has_trailer(reader)? {
        return Ok(len - ID3V1_SIZE);
    }

    Ok(len)
}

fn hash_region<R>(reader: &mut R, start: u64, len: u64) -> Result<String>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(start))?;

    let mut hasher = Sha1::new();
    let copied = io::copy(&mut reader.by_ref().take(len), &mut hasher)?;
    if copied != len {
        return Err(TagError::Truncated("audio data"));
    }

    Ok(hex::encode(hasher.finalize()))
}
