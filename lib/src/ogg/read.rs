use std::io::{Read, Seek, SeekFrom};

use super::page::{PageHeader, PAGE_HEADER_LEN};
use super::OggTag;
use crate::error::{ErrorPosition, Result, TagError};
use crate::utils::read_bytes;
use crate::vorbis::VorbisComments;

const IDENTIFICATION_PACKET: u8 = 1;
const COMMENT_PACKET: u8 = 3;

/// Packet type (1) + `vorbis` (6) + the fixed identification fields (23)
const IDENTIFICATION_LEN: usize = 30;

/// Upper bound for a reassembled packet
const MAX_PACKET_LEN: usize = 128 * 1024 * 1024;

/// Read the vorbis comments of an OGG Vorbis stream
pub fn read_from<R>(reader: &mut R) -> Result<OggTag>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(0))?;

    // The identification header is alone on the first page
    let first_page = PageHeader::read(reader)?;
    let identification = read_bytes(reader, first_page.payload_len())
        .map_err(|_| TagError::Truncated("OGG page"))?;
    match identification.first() {
        Some(&IDENTIFICATION_PACKET) if identification.len() >= IDENTIFICATION_LEN => {}
        Some(&IDENTIFICATION_PACKET) | None => {
            return Err(TagError::Truncated("Vorbis identification header"))
        }
        Some(ty) => {
            return Err(TagError::malformed(
                "Vorbis identification header",
                format!("expected packet type 1, found {ty}"),
                ErrorPosition::new(0),
            ))
        }
    }

    // The comment header may share its pages with the setup header
    let packet = read_packet(reader)?;
    let Some((&ty, rest)) = packet.split_first() else {
        return Err(TagError::Truncated("Vorbis comment header"));
    };
    if ty != COMMENT_PACKET {
        return Err(TagError::malformed_simple(
            "Vorbis comment header",
            format!("expected packet type 3, found {ty}"),
        ));
    }
    let comments = rest
        .get(6..)
        .ok_or(TagError::Truncated("Vorbis comment header"))?;

    Ok(OggTag {
        comments: VorbisComments::read(comments)?,
    })
}

/// Concatenate the payloads of the page at the current position and every page continuing
/// it. The first page that starts a new packet is left unread.
pub(crate) fn read_packet<R>(reader: &mut R) -> Result<Vec<u8>>
where
    R: Read + Seek,
{
    let mut packet = Vec::new();
    let mut first_page = true;

    loop {
        let header_type = match PageHeader::read_start(reader) {
            Ok(header_type) => header_type,
            Err(TagError::Truncated(_)) if !first_page => break,
            Err(e) => return Err(e),
        };

        if !first_page && header_type & 0x01 == 0 {
            reader.seek(SeekFrom::Current(-PAGE_HEADER_LEN))?;
            break;
        }
        first_page = false;

        let page = PageHeader::read_segments(reader, header_type)?;

        let payload_len = page.payload_len();
        if packet.len() + payload_len > MAX_PACKET_LEN {
            return Err(TagError::malformed(
                "OGG packet",
                format!("packet grows beyond {MAX_PACKET_LEN} bytes"),
                ErrorPosition::new(reader.stream_position()?),
            ));
        }

        let payload =
            read_bytes(reader, payload_len).map_err(|_| TagError::Truncated("OGG page"))?;
        packet.extend(payload);
    }

    Ok(packet)
}
