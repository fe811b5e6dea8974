use std::io::Read;

use crate::error::{Result, TagError};
use crate::utils::read_bytes;

/// Capture pattern + the header fields before the segment count
pub(crate) const PAGE_HEADER_LEN: i64 = 26;

/// The header of one OGG page, without its payload
///
/// Layout:
///
/// * capture pattern `OggS` (4)
/// * version (1), header type (1), granule position (8), serial (4), sequence (4),
///   checksum (4)
/// * segment count (1) + segment table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub header_type: u8,
    pub segments: Vec<u8>,
}

impl PageHeader {
    /// Read the header up to and including the segment count, leaving the segment table
    /// unread. The page is rewound with [`PAGE_HEADER_LEN`] when it is not wanted.
    pub(crate) fn read_start<R>(reader: &mut R) -> Result<u8>
    where
        R: Read,
    {
        let mut capture = [0; 4];
        reader.read_exact(&mut capture)?;
        if &capture != b"OggS" {
            return Err(TagError::FormatMismatch { expected: "OggS" });
        }

        let mut head = [0; 22];
        reader
            .read_exact(&mut head)
            .map_err(|_| TagError::Truncated("OGG page header"))?;

        Ok(head[1])
    }

    /// Read the segment count and table following [`PageHeader::read_start`]
    pub(crate) fn read_segments<R>(reader: &mut R, header_type: u8) -> Result<Self>
    where
        R: Read,
    {
        let mut count = [0; 1];
        reader
            .read_exact(&mut count)
            .map_err(|_| TagError::Truncated("OGG page header"))?;
        let segments = read_bytes(reader, usize::from(count[0]))
            .map_err(|_| TagError::Truncated("OGG segment table"))?;

        Ok(Self {
            header_type,
            segments,
        })
    }

    /// Read a whole page header
    pub fn read<R>(reader: &mut R) -> Result<Self>
    where
        R: Read,
    {
        let header_type = Self::read_start(reader)?;
        Self::read_segments(reader, header_type)
    }

    /// The first packet on this page continues one of the previous page
    pub fn continued(&self) -> bool {
        self.header_type & 0x01 != 0
    }

    /// Length of the page payload
    pub fn payload_len(&self) -> usize {
        self.segments.iter().map(|&len| usize::from(len)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_header() {
        let mut data = b"OggS\x00\x01".to_vec();
        data.extend_from_slice(&[0; 20]);
        data.extend_from_slice(&[3, 255, 255, 10]);

        let header = PageHeader::read(&mut data.as_slice()).unwrap();
        assert!(header.continued());
        assert_eq!(header.payload_len(), 520);
    }

    #[test]
    fn test_bad_page_header() {
        assert!(matches!(
            PageHeader::read(&mut &b"fLaC\x00\x00"[..]),
            Err(TagError::FormatMismatch { .. })
        ));

        let mut data = b"OggS\x00\x00".to_vec();
        data.extend_from_slice(&[0; 20]);
        data.extend_from_slice(&[2, 255]);
        assert!(matches!(
            PageHeader::read(&mut data.as_slice()),
            Err(TagError::Truncated(_))
        ));
    }
}
