use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};

use super::frame::{decode_frame, FrameHeader};
use super::header::{extended_header_len, read_header, Id3v2Header, Id3v2Version};
use super::tag::Id3v2Tag;
use super::unsynch::Unsynchroniser;
use crate::config::ReadOptions;
use crate::error::{Result, TagError};
use crate::mp3;
use crate::types::TagValue;
use crate::utils::{read_bytes, synchsafe, take_slice};

/// Read the ID3v2 tag at the start of `reader`.
///
/// With [`ReadOptions::analyze_stream`] the MPEG audio following the tag is analyzed as
/// well. A failed analysis only leaves the `stream_*` items out.
pub fn read_from<R>(reader: &mut R, options: &ReadOptions) -> Result<Id3v2Tag>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(0))?;
    let header = read_header(reader)?;

    let mut body = read_bytes(reader, header.size as usize)
        .map_err(|_| TagError::Truncated("ID3v2 tag body"))?;
    if header.unsynchronisation {
        let mut decoded = Vec::with_capacity(body.len());
        Unsynchroniser::new(body.as_slice()).read_to_end(&mut decoded)?;
        body = decoded;
    }

    let mut raw = parse_frames(&body, &header)?;

    if options.analyze_stream {
        reader.seek(SeekFrom::Start(header.tag_len()))?;
        match mp3::analyze(reader, options.scan_mode) {
            Ok(info) => {
                raw.insert("stream_type".to_string(), TagValue::Text(info.stream_type()));
                raw.insert(
                    "stream_bitrate".to_string(),
                    TagValue::Text(info.stream_bitrate()),
                );
                raw.insert("stream_audio".to_string(), TagValue::Text(info.stream_audio()));
                raw.insert(
                    "stream_size".to_string(),
                    TagValue::Integer(u32::try_from(info.size).unwrap_or(u32::MAX)),
                );
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                raw.insert(
                    "stream_length".to_string(),
                    TagValue::Integer(info.length as u32),
                );
            }
            Err(e) => debug!("No MPEG stream information after the ID3v2 tag: {e}"),
        }
    }

    Ok(Id3v2Tag { header, raw })
}

pub(crate) fn parse_frames(body: &[u8], header: &Id3v2Header) -> Result<HashMap<String, TagValue>> {
    let mut raw = HashMap::new();
    let version = header.version;

    if header.extended_header && version == Id3v2Version::V2 {
        // Compression was a flag only used in ID3v2.2, a compression scheme was never decided
        warn!("Ignoring the frames of a compressed ID3v2.2 tag");
        return Ok(raw);
    }

    let mut offset = 0;
    if header.extended_header {
        offset = extended_header_len(body, version)?;
    }

    let header_len = FrameHeader::len(version);

    while offset < body.len() {
        let Some(frame) = FrameHeader::parse(&body[offset..], version) else {
            break;
        };

        let start = offset + header_len;
        let end = start
            .checked_add(frame.size)
            .filter(|&end| end <= body.len())
            .ok_or(TagError::Truncated("ID3v2 frame"))?;
        offset = end;

        let flags = frame.flags;
        if flags.unsynchronisation || flags.compression || flags.encryption {
            warn!(
                "Skipping frame {} ({} bytes): unsynchronised, compressed or encrypted frames are not decoded",
                frame.name, frame.size
            );
            continue;
        }

        let mut content = &body[start..end];
        if flags.group_identity {
            take_slice(&mut content, 1, "ID3v2 group identifier")?;
        }
        if flags.data_length_indicator {
            let indicator = take_slice(&mut content, 4, "ID3v2 data length indicator")?;
            trace!("Frame {} data length indicator: {}", frame.name, synchsafe(indicator));
        }

        match decode_frame(&frame.name, content)? {
            Some(value) => {
                let key = unique_key(&raw, &frame.name);
                raw.insert(key, value);
            }
            None => trace!("Skipping frame {}", frame.name),
        }
    }

    Ok(raw)
}

/// `name`, or `name_0`, `name_1`, ... when the name is taken
fn unique_key(raw: &HashMap<String, TagValue>, name: &str) -> String {
    if !raw.contains_key(name) {
        return name.to_string();
    }

    let mut idx = 0;
    loop {
        let key = format!("{name}_{idx}");
        if !raw.contains_key(&key) {
            return key;
        }
        idx += 1;
    }
}
