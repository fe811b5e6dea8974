use std::io::{Read, Seek};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{ErrorPosition, Result, TagError};

/// The header of one atom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AtomInfo {
    pub(crate) start: u64,
    /// Length of the whole atom, header included
    pub(crate) len: u64,
    pub(crate) header_len: u64,
    pub(crate) ident: [u8; 4],
}

impl AtomInfo {
    /// Read an atom header at the current position.
    ///
    /// A length of 0 extends the atom to `parent_end`, a length of 1 is followed by a 64 bit
    /// length. The atom must end within `parent_end`.
    pub(crate) fn read<R>(reader: &mut R, parent_end: u64) -> Result<Self>
    where
        R: Read + Seek,
    {
        let start = reader.stream_position()?;

        let len = reader.read_u32::<BigEndian>()?;
        let mut ident = [0; 4];
        reader.read_exact(&mut ident)?;

        let (len, header_len) = match len {
            // The atom extends to the end of its parent
            0 => (parent_end.saturating_sub(start), 8),
            // There's an extended length
            1 => (reader.read_u64::<BigEndian>()?, 16),
            _ => (u64::from(len), 8),
        };

        let info = Self {
            start,
            len,
            header_len,
            ident,
        };

        if len < header_len {
            return Err(TagError::malformed(
                format!("MP4 atom {}", info.name()),
                format!("invalid length {len}"),
                ErrorPosition::new(start),
            ));
        }
        if start.checked_add(len).map_or(true, |end| end > parent_end) {
            return Err(TagError::malformed(
                format!("MP4 atom {}", info.name()),
                format!("{len} bytes do not fit into the parent atom ending at {parent_end}"),
                ErrorPosition::new(start),
            ));
        }

        Ok(info)
    }

    /// Offset of the first byte after the atom
    pub(crate) fn end(&self) -> u64 {
        self.start + self.len
    }

    /// Length of the atom content
    pub(crate) fn content_len(&self) -> u64 {
        self.len - self.header_len
    }

    /// The atom name with `©` decoded from Latin-1
    pub(crate) fn name(&self) -> String {
        ident_to_string(self.ident)
    }
}

pub(crate) fn ident_to_string(ident: [u8; 4]) -> String {
    ident.iter().map(|&b| char::from(b)).collect()
}
