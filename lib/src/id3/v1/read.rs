use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};

use super::constants::genre_name;
use super::tag::Id3v1Tag;
use crate::error::{Result, TagError};
use crate::text::{decode_text, trim_padding, TextEncoding};
use crate::types::TagValue;

/// Size of the ID3v1 trailer
pub const ID3V1_SIZE: u64 = 128;

/// Read the ID3v1 trailer at the end of `reader`.
///
/// Fails with [`TagError::NotId3v1`] when the stream is too short or does not end in a
/// `TAG` trailer.
pub fn read_from<R>(reader: &mut R) -> Result<Id3v1Tag>
where
    R: Read + Seek,
{
    let len = reader.seek(SeekFrom::End(0))?;
    if len < ID3V1_SIZE {
        return Err(TagError::NotId3v1);
    }

    reader.seek(SeekFrom::Start(len - ID3V1_SIZE))?;
    let mut trailer = [0; 128];
    reader.read_exact(&mut trailer)?;

    if &trailer[..3] != b"TAG" {
        return Err(TagError::NotId3v1);
    }

    parse_id3v1(&trailer)
}

/// Whether the stream ends in an ID3v1 trailer, the position is left at the end
pub(crate) fn has_trailer<R>(reader: &mut R) -> Result<bool>
where
    R: Read + Seek,
{
    let len = reader.seek(SeekFrom::End(0))?;
    if len < ID3V1_SIZE {
        return Ok(false);
    }

    reader.seek(SeekFrom::Start(len - ID3V1_SIZE))?;
    let mut marker = [0; 3];
    reader.read_exact(&mut marker)?;
    reader.seek(SeekFrom::End(0))?;

    Ok(&marker == b"TAG")
}

pub(crate) fn parse_id3v1(trailer: &[u8; 128]) -> Result<Id3v1Tag> {
    let mut raw = HashMap::new();
    let reader = &trailer[3..];

    raw.insert("title".to_string(), TagValue::Text(field(&reader[..30])?));
    raw.insert("artist".to_string(), TagValue::Text(field(&reader[30..60])?));
    raw.insert("album".to_string(), TagValue::Text(field(&reader[60..90])?));
    raw.insert("year".to_string(), TagValue::Text(field(&reader[90..94])?));

    // ID3v1.1: a zero byte followed by the track number ends the comment
    let comment = &reader[94..124];
    let comment = if comment[28] == 0 && comment[29] != 0 {
        raw.insert(
            "track".to_string(),
            TagValue::Integer(u32::from(comment[29])),
        );
        &comment[..28]
    } else {
        comment
    };
    raw.insert("comment".to_string(), TagValue::Text(field(comment)?));

    raw.insert(
        "genre".to_string(),
        TagValue::Text(genre_name(usize::from(reader[124])).to_string()),
    );

    Ok(Id3v1Tag { raw })
}

fn field(data: &[u8]) -> Result<String> {
    let text = decode_text(TextEncoding::Latin1, data)?;
    Ok(trim_padding(&text).to_string())
}
