use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};

use super::atom_info::{ident_to_string, AtomInfo};
use super::Mp4Tag;
use crate::config::ReadOptions;
use crate::error::{ErrorPosition, Result, TagError};
use crate::picture::{Picture, PictureType};
use crate::types::{FileType, TagValue};
use crate::utils::{be_uint, read_bytes};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// The only `mean` accepted for freeform atoms
const ITUNES_MEAN: &str = "com.apple.iTunes";

/// Atoms decoded into the tag, `----` is handled on its own
const TAG_ATOMS: [&[u8; 4]; 21] = [
    b"\xA9alb", b"\xA9art", b"\xA9ART", b"aART", b"\xA9day", b"\xA9nam", b"\xA9gen", b"gnre",
    b"geID", b"trkn", b"\xA9wrt", b"\xA9too", b"cprt", b"covr", b"\xA9grp", b"keyw", b"\xA9lyr",
    b"\xA9cmt", b"tmpo", b"cpil", b"disk",
];

enum Walk {
    Continue,
    /// Reached the audio data after the metadata
    Stop,
}

#[derive(Default)]
struct State {
    raw: HashMap<String, TagValue>,
    file_type: FileType,
    seen_moov: bool,
}

/// Read the `ilst` items of an MP4 file
pub fn read_from<R>(reader: &mut R, options: &ReadOptions) -> Result<Mp4Tag>
where
    R: Read + Seek,
{
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let ftyp = AtomInfo::read(reader, end)?;
    if &ftyp.ident != b"ftyp" {
        return Err(TagError::FormatMismatch { expected: "ftyp" });
    }
    reader.seek(SeekFrom::Start(ftyp.end()))?;

    let mut state = State::default();
    walk(reader, end, 0, options, &mut state)?;

    Ok(Mp4Tag {
        raw: state.raw,
        file_type: state.file_type,
    })
}

fn walk<R>(
    reader: &mut R,
    parent_end: u64,
    depth: usize,
    options: &ReadOptions,
    state: &mut State,
) -> Result<Walk>
where
    R: Read + Seek,
{
    loop {
        let pos = reader.stream_position()?;
        if parent_end.saturating_sub(pos) < 8 {
            return Ok(Walk::Continue);
        }

        let atom = AtomInfo::read(reader, parent_end)?;

        match &atom.ident {
            b"mdat" if state.seen_moov => return Ok(Walk::Stop),
            b"moov" | b"udta" | b"meta" | b"ilst" | b"trak" | b"mdia" | b"minf" | b"stbl" => {
                if depth >= options.max_atom_depth {
                    return Err(TagError::malformed(
                        format!("MP4 atom {}", atom.name()),
                        format!("nested deeper than {} atoms", options.max_atom_depth),
                        ErrorPosition::new(atom.start),
                    ));
                }

                if &atom.ident == b"moov" {
                    state.seen_moov = true;
                }
                if &atom.ident == b"meta" {
                    // version and flags
                    reader.seek(SeekFrom::Current(4))?;
                }

                if let Walk::Stop = walk(reader, atom.end(), depth + 1, options, state)? {
                    return Ok(Walk::Stop);
                }
            }
            b"stsd" => {
                let content = read_content(reader, &atom)?;
                let file_type = sample_entry_type(&content);
                if file_type != FileType::Unknown {
                    state.file_type = file_type;
                }
            }
            b"----" => {
                let content = read_content(reader, &atom)?;
                read_freeform(&content, atom.start, &mut state.raw)?;
            }
            ident if TAG_ATOMS.contains(&ident) => {
                let content = read_content(reader, &atom)?;
                read_data(*ident, &content, atom.start, &mut state.raw)?;
            }
            _ => trace!("Skipping atom {} ({} bytes)", atom.name(), atom.len),
        }

        reader.seek(SeekFrom::Start(atom.end()))?;
    }
}

fn read_content<R>(reader: &mut R, atom: &AtomInfo) -> Result<Vec<u8>>
where
    R: Read,
{
    let len = usize::try_from(atom.content_len()).map_err(|_| {
        TagError::malformed(
            format!("MP4 atom {}", atom.name()),
            "atom is too large",
            ErrorPosition::new(atom.start),
        )
    })?;

    read_bytes(reader, len).map_err(|_| TagError::Truncated("MP4 atom"))
}

/// `stsd`: version and flags (4), entry count (4), then the first sample entry
fn sample_entry_type(content: &[u8]) -> FileType {
    match content.get(12..16) {
        Some(b"mp4a") => FileType::Aac,
        Some(b"alac") => FileType::Alac,
        _ => FileType::Unknown,
    }
}

/// Decode the first `data` atom of an item.
///
/// Layout of `data`: size (4), `data` (4), version (1), content class (3), locale (4),
/// then the value.
fn read_data(
    ident: [u8; 4],
    content: &[u8],
    offset: u64,
    raw: &mut HashMap<String, TagValue>,
) -> Result<()> {
    let name = ident_to_string(ident);
    let malformed = |details: &str| {
        TagError::malformed(
            format!("MP4 atom {name}"),
            details,
            ErrorPosition::new(offset),
        )
    };

    let data = content
        .get(8..)
        .ok_or_else(|| malformed("missing data atom"))?;
    if &content[4..8] != b"data" {
        trace!(
            "Skipping atom {name}: child {} is not a data atom",
            ident_to_string([content[4], content[5], content[6], content[7]])
        );
        return Ok(());
    }

    if &ident == b"gnre" {
        let genre = data.last().ok_or_else(|| malformed("empty genre"))?;
        raw.insert(name, TagValue::Integer(u32::from(*genre)));
        return Ok(());
    }

    if data.len() < 8 {
        return Err(malformed("data atom is missing its class and locale"));
    }
    #[allow(clippy::cast_possible_truncation)]
    let class = be_uint(&data[1..4]) as u32;
    if !matches!(class, 0 | 1 | 13 | 14 | 21) {
        return Err(TagError::InvalidContentClass(class));
    }
    let value = &data[8..];

    if matches!(&ident, b"trkn" | b"disk") {
        if value.len() < 6 {
            return Err(malformed("number and total need 6 bytes"));
        }

        #[allow(clippy::cast_possible_truncation)]
        let (number, total) = (
            be_uint(&value[2..4]) as u32,
            be_uint(&value[4..6]) as u32,
        );
        raw.insert(format!("{name}_count"), TagValue::Integer(total));
        raw.insert(name, TagValue::Integer(number));
        return Ok(());
    }

    let value = match class {
        0 if &ident == b"covr" && value.starts_with(&PNG_SIGNATURE) => cover("image/png", value),
        0 => return Err(malformed("implicit content class")),
        1 => TagValue::Text(String::from_utf8_lossy(value).into_owned()),
        13 => cover("image/jpeg", value),
        14 => cover("image/png", value),
        _ => {
            if value.is_empty() {
                return Err(malformed("empty integer"));
            }
            // at most 32 bits
            let start = value.len().saturating_sub(4);
            #[allow(clippy::cast_possible_truncation)]
            let integer = be_uint(&value[start..]) as u32;
            TagValue::Integer(integer)
        }
    };
    raw.insert(name, value);

    Ok(())
}

fn cover(mime_type: &str, data: &[u8]) -> TagValue {
    TagValue::Picture(Picture::new(
        mime_type.to_string(),
        PictureType::CoverFront,
        String::new(),
        data.to_vec(),
    ))
}

/// Decode a `----` atom, made of `mean`, `name` and one or more `data` atoms.
///
/// Items with another `mean` than `com.apple.iTunes` are ignored. The sub-atoms must fill the
/// atom exactly.
fn read_freeform(content: &[u8], offset: u64, raw: &mut HashMap<String, TagValue>) -> Result<()> {
    let malformed = |details: &str| {
        TagError::malformed("MP4 atom ----", details, ErrorPosition::new(offset))
    };

    let mut mean = String::new();
    let mut name = String::new();
    let mut values = Vec::new();

    let mut data = content;
    while !data.is_empty() {
        if data.len() < 8 {
            return Err(malformed("sub-atom sizes do not add up"));
        }

        let size = be_uint(&data[..4]);
        let sub_ident = [data[4], data[5], data[6], data[7]];
        let size = usize::try_from(size)
            .ok()
            .filter(|&size| size >= 8 && size <= data.len())
            .ok_or_else(|| malformed("sub-atom sizes do not add up"))?;

        let body = &data[8..size];
        data = &data[size..];

        // version and flags
        let Some(body) = body.get(4..) else {
            return Err(malformed("sub-atom is missing its version and flags"));
        };

        match &sub_ident {
            b"mean" => mean = String::from_utf8_lossy(body).into_owned(),
            b"name" => name = String::from_utf8_lossy(body).into_owned(),
            b"data" => {
                // locale
                let value = body
                    .get(4..)
                    .ok_or_else(|| malformed("data atom is missing its locale"))?;
                values.push(String::from_utf8_lossy(value).into_owned());
            }
            _ => trace!("Skipping ---- sub-atom {}", ident_to_string(sub_ident)),
        }
    }

    if mean != ITUNES_MEAN || name.is_empty() || values.is_empty() {
        debug!("Ignoring freeform atom {mean}:{name}");
        return Ok(());
    }

    raw.insert(name, TagValue::Text(values.join(";")));
    Ok(())
}
