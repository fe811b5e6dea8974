use std::io::Read;

use crate::error::{Result, TagError};

/// Read exactly `n` bytes from `reader`.
///
/// The buffer only grows as data actually arrives, so a bogus declared size cannot
/// allocate more than the stream holds.
pub fn read_bytes<R>(reader: &mut R, n: usize) -> Result<Vec<u8>>
where
    R: Read,
{
    let mut buf = Vec::new();
    reader.take(n as u64).read_to_end(&mut buf)?;

    if buf.len() < n {
        return Err(TagError::Truncated("bytes"));
    }

    Ok(buf)
}

/// Interpret `bytes` as a big-endian unsigned integer
#[must_use]
pub fn be_uint(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0_u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Interpret `bytes` as a synchsafe integer, only the low 7 bits of each byte count
#[must_use]
pub fn synchsafe(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0_u32, |acc, &b| (acc << 7) | u32::from(b & 0x7F))
}

#[must_use]
pub fn get_bit(byte: u8, n: u8) -> bool {
    byte & (1 << n) != 0
}

#[must_use]
pub fn clear_bit(byte: u8, n: u8) -> u8 {
    byte & !(1 << n)
}

/// Split `n` bytes off the front of `data`, advancing it
pub(crate) fn take_slice<'a>(data: &mut &'a [u8], n: usize, what: &'static str) -> Result<&'a [u8]> {
    if data.len() < n {
        return Err(TagError::Truncated(what));
    }

    let (head, tail) = data.split_at(n);
    *data = tail;
    Ok(head)
}

/// Split a big-endian `u32` off the front of `data`
pub(crate) fn take_u32_be(data: &mut &[u8], what: &'static str) -> Result<u32> {
    let bytes = take_slice(data, 4, what)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
