use std::time::Duration;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Result, TagError};

/// Only 36 bits of the total sample count are defined
const TOTAL_SAMPLES_MASK: u64 = (1 << 36) - 1;

/// The audio properties of a FLAC `STREAMINFO` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamInfo {
    pub sample_rate: u32,
    pub channels: u8,
    pub bits_per_sample: u8,
    pub total_samples: u64,
}

impl StreamInfo {
    /// Decode the content of a `STREAMINFO` block
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 18 {
            return Err(TagError::Truncated("FLAC STREAMINFO block"));
        }

        let mut data = &bytes[10..18];
        // Skip 10 bytes
        // Minimum block size (2)
        // Maximum block size (2)
        // Minimum frame size (3)
        // Maximum frame size (3)
        //
        // Read 8 bytes
        // Sample rate (20 bits)
        // Number of channels - 1 (3 bits)
        // Bits per sample - 1 (5 bits)
        // Total samples (36 bits)
        let info = data.read_u64::<BigEndian>()?;

        #[allow(clippy::cast_possible_truncation)]
        let stream_info = Self {
            sample_rate: (info >> 44) as u32,
            channels: ((info >> 41) & 0x07) as u8 + 1,
            bits_per_sample: ((info >> 36) & 0x1F) as u8 + 1,
            total_samples: info & TOTAL_SAMPLES_MASK,
        };

        Ok(stream_info)
    }

    /// `total_samples / sample_rate`, zero when the sample rate is unknown
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }

        Duration::from_millis(self.total_samples * 1000 / u64::from(self.sample_rate))
    }
}
