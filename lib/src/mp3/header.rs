use std::fmt::{Display, Formatter, Result as FmtResult};

use super::constants::{BITRATES, SAMPLE_RATES, XING_OFFSETS};

pub(crate) fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
    frame_sync[0] == 0xFF && frame_sync[1] >> 5 == 0b111
}

/// MPEG Audio version
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpegVersion {
    V1,
    V2,
    V2_5,
}

impl Display for MpegVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let version = match self {
            Self::V1 => "1",
            Self::V2 => "2",
            Self::V2_5 => "2.5",
        };
        write!(f, "{version}")
    }
}

/// MPEG layer
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Layer1 = 1,
    Layer2 = 2,
    Layer3 = 3,
}

impl Display for Layer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let layer = match self {
            Self::Layer1 => "I",
            Self::Layer2 => "II",
            Self::Layer3 => "III",
        };
        write!(f, "{layer}")
    }
}

/// Channel mode
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo = 0,
    JointStereo = 1,
    DualChannel = 2,
    SingleChannel = 3,
}

impl Display for ChannelMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mode = match self {
            Self::Stereo => "Stereo",
            Self::JointStereo => "Joint Stereo",
            Self::DualChannel => "Dual",
            Self::SingleChannel => "Mono",
        };
        write!(f, "{mode}")
    }
}

/// A decoded 4 byte MPEG audio frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub layer: Layer,
    /// Bitrate in kbps
    pub bitrate: u32,
    pub sample_rate: u32,
    pub padding: bool,
    pub channel_mode: ChannelMode,
}

impl FrameHeader {
    /// Decode a frame header, `None` when the bytes are not a usable frame
    /// (no sync, reserved version or layer, free or bad bitrate, reserved sample rate).
    pub fn parse(bytes: [u8; 4]) -> Option<Self> {
        if !verify_frame_sync([bytes[0], bytes[1]]) {
            return None;
        }

        let header = u32::from_be_bytes(bytes);

        let version = match (header >> 19) & 0b11 {
            0 => MpegVersion::V2_5,
            2 => MpegVersion::V2,
            3 => MpegVersion::V1,
            _ => return None,
        };

        let layer = match (header >> 17) & 0b11 {
            1 => Layer::Layer3,
            2 => Layer::Layer2,
            3 => Layer::Layer1,
            _ => return None,
        };

        let bitrate_index = ((header >> 12) & 0xF) as usize;
        let bitrate = BITRATES[version_index(version)][layer as usize - 1][bitrate_index];
        if bitrate == 0 {
            return None;
        }

        let sample_rate_index = ((header >> 10) & 0b11) as usize;
        let sample_rate = *SAMPLE_RATES[version as usize].get(sample_rate_index)?;

        let channel_mode = match (header >> 6) & 0b11 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualChannel,
            _ => ChannelMode::SingleChannel,
        };

        Some(Self {
            version,
            layer,
            bitrate,
            sample_rate,
            padding: (header >> 9) & 1 == 1,
            channel_mode,
        })
    }

    /// Length of the whole frame in bytes, header included
    pub fn frame_len(&self) -> u32 {
        let padding = u32::from(self.padding);
        let bits = self.bitrate * 1000;

        match (self.layer, self.version) {
            (Layer::Layer1, _) => (12 * bits / self.sample_rate + padding) * 4,
            (Layer::Layer2, _) | (Layer::Layer3, MpegVersion::V1) => {
                144 * bits / self.sample_rate + padding
            }
            (Layer::Layer3, MpegVersion::V2 | MpegVersion::V2_5) => {
                72 * bits / self.sample_rate + padding
            }
        }
    }

    pub fn samples_per_frame(&self) -> u32 {
        match (self.layer, self.version) {
            (Layer::Layer1, _) => 384,
            (Layer::Layer3, MpegVersion::V2 | MpegVersion::V2_5) => 576,
            _ => 1152,
        }
    }

    /// Offset of a Xing/Info header, counted from the end of the frame header
    pub fn xing_offset(&self) -> u64 {
        let mono = usize::from(self.channel_mode == ChannelMode::SingleChannel);
        XING_OFFSETS[version_index(self.version)][mono]
    }

    /// Bitrate table for this version and layer
    pub(crate) fn bitrates(&self) -> &'static [u32; 16] {
        &BITRATES[version_index(self.version)][self.layer as usize - 1]
    }
}

fn version_index(version: MpegVersion) -> usize {
    usize::from(version != MpegVersion::V1)
}
