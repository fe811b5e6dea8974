use std::io::{Read, Seek, SeekFrom};

use super::constants::VBRI_OFFSET;
use super::header::{ChannelMode, FrameHeader, Layer, MpegVersion};
use crate::config::ScanMode;
use crate::error::{ErrorPosition, Result, TagError};

/// How many bytes are searched for the first frame
const SYNC_SEARCH_LEN: usize = 64 * 1024;

/// Stream properties estimated by [`analyze`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mp3Info {
    pub version: MpegVersion,
    pub layer: Layer,
    pub channel_mode: ChannelMode,
    pub sample_rate: u32,
    /// Bitrate in kbps, the nearest table entry for VBR streams
    pub bitrate: u32,
    pub vbr: bool,
    /// Size of the audio data in bytes
    pub size: u64,
    /// Duration in seconds
    pub length: f64,
}

impl Mp3Info {
    /// `MPEG 1 Layer III`
    pub fn stream_type(&self) -> String {
        format!("MPEG {} Layer {}", self.version, self.layer)
    }

    /// `128 kbps CBR`
    pub fn stream_bitrate(&self) -> String {
        let kind = if self.vbr { "VBR" } else { "CBR" };
        format!("{} kbps {kind}", self.bitrate)
    }

    /// `44100 Hz Joint Stereo`
    pub fn stream_audio(&self) -> String {
        format!("{} Hz {}", self.sample_rate, self.channel_mode)
    }
}

/// Estimate bitrate, duration and size of the MPEG audio stream starting at the
/// current position of `reader`.
///
/// In [`ScanMode::Fast`] a Xing/Info or VBRI header is trusted when present, otherwise a
/// limited number of frames is sampled and the result extrapolated to the stream length.
pub fn analyze<R>(reader: &mut R, mode: ScanMode) -> Result<Mp3Info>
where
    R: Read + Seek,
{
    let (start, first) = find_first_frame(reader)?;

    if mode == ScanMode::Fast {
        if let Some(info) = read_vbr_header(reader, start, &first)? {
            return Ok(info);
        }
    }

    scan_frames(reader, start, first, mode)
}

/// Skip padding and garbage up to the first valid frame header
fn find_first_frame<R>(reader: &mut R) -> Result<(u64, FrameHeader)>
where
    R: Read + Seek,
{
    let origin = reader.stream_position()?;

    let mut buf = Vec::new();
    reader
        .by_ref()
        .take(SYNC_SEARCH_LEN as u64)
        .read_to_end(&mut buf)?;

    buf.windows(4)
        .enumerate()
        .find_map(|(idx, window)| {
            FrameHeader::parse([window[0], window[1], window[2], window[3]])
                .map(|header| (origin + idx as u64, header))
        })
        .ok_or_else(|| {
            TagError::malformed(
                "MPEG audio",
                "no frame sync found",
                ErrorPosition::new(origin),
            )
        })
}

/// Xing header: `Xing`/`Info`, 4 flag bytes, then frames and bytes when flags 1 and 2 are set.
/// VBRI header: `VBRI`, 6 bytes of version/delay/quality, then bytes and frames.
fn read_vbr_header<R>(reader: &mut R, start: u64, first: &FrameHeader) -> Result<Option<Mp3Info>>
where
    R: Read + Seek,
{
    let mut frames_and_size = None;

    reader.seek(SeekFrom::Start(start + 4 + first.xing_offset()))?;
    let mut xing = [0; 16];
    if reader.read_exact(&mut xing).is_ok()
        && matches!(&xing[..4], b"Xing" | b"Info")
        && xing[7] & 0x03 == 0x03
    {
        let frames = u32::from_be_bytes([xing[8], xing[9], xing[10], xing[11]]);
        let size = u32::from_be_bytes([xing[12], xing[13], xing[14], xing[15]]);
        frames_and_size = Some((frames, size));
    }

    if frames_and_size.is_none() {
        reader.seek(SeekFrom::Start(start + 4 + VBRI_OFFSET))?;
        let mut vbri = [0; 18];
        if reader.read_exact(&mut vbri).is_ok() && &vbri[..4] == b"VBRI" {
            let size = u32::from_be_bytes([vbri[10], vbri[11], vbri[12], vbri[13]]);
            let frames = u32::from_be_bytes([vbri[14], vbri[15], vbri[16], vbri[17]]);
            frames_and_size = Some((frames, size));
        }
    }

    let Some((frames, size)) = frames_and_size else {
        return Ok(None);
    };

    if frames == 0 {
        debug!("Ignoring VBR header without frames");
        return Ok(None);
    }

    let length =
        f64::from(frames) * f64::from(first.samples_per_frame()) / f64::from(first.sample_rate);
    let bitrate = nearest_bitrate(f64::from(size / 125) / length, first);

    Ok(Some(Mp3Info {
        version: first.version,
        layer: first.layer,
        channel_mode: first.channel_mode,
        sample_rate: first.sample_rate,
        bitrate,
        vbr: bitrate != first.bitrate,
        size: u64::from(size),
        length,
    }))
}

fn scan_frames<R>(reader: &mut R, start: u64, first: FrameHeader, mode: ScanMode) -> Result<Mp3Info>
where
    R: Read + Seek,
{
    let mut pos = start;
    let mut frame_count: usize = 0;
    let mut bitrate_sum: u64 = 0;
    let mut bitrate_changes: usize = 0;
    let mut last_bitrate = first.bitrate;
    let mut vbr = false;
    let mut length = 0.0_f64;
    let mut reached_end = false;

    let mut buf = [0; 4];
    loop {
        if let Some(limit) = mode.frame_limit(bitrate_changes > 2) {
            if frame_count >= limit {
                break;
            }
        }

        reader.seek(SeekFrom::Start(pos))?;
        if reader.read_exact(&mut buf).is_err() {
            reached_end = true;
            break;
        }

        if let Some(header) = FrameHeader::parse(buf) {
            frame_count += 1;
            bitrate_sum += u64::from(header.bitrate);
            length += f64::from(header.samples_per_frame()) / f64::from(first.sample_rate);

            if bitrate_changes > 2 {
                vbr = true;
            } else if header.bitrate != last_bitrate {
                bitrate_changes += 1;
            }
            last_bitrate = header.bitrate;

            pos += u64::from(header.frame_len().max(1));
        } else if &buf[..3] == b"TAG" {
            // ID3v1 trailer
            pos += 128;
        } else {
            pos += 1;
        }
    }

    if frame_count == 0 {
        return Err(TagError::malformed(
            "MPEG audio",
            "no complete frame found",
            ErrorPosition::new(start),
        ));
    }

    let end = reader.seek(SeekFrom::End(0))?;
    let scanned = pos.min(end).saturating_sub(start);
    let size = if reached_end {
        scanned
    } else {
        // extrapolate from the sampled frames to the whole stream
        let total = end.saturating_sub(start);
        if scanned > 0 {
            length = length * total as f64 / scanned as f64;
        }
        total
    };

    let bitrate = if frame_count > 1 || vbr {
        nearest_bitrate(bitrate_sum as f64 / frame_count as f64, &first)
    } else {
        first.bitrate
    };

    Ok(Mp3Info {
        version: first.version,
        layer: first.layer,
        channel_mode: first.channel_mode,
        sample_rate: first.sample_rate,
        bitrate,
        vbr,
        size,
        length,
    })
}

/// The entry of the bitrate table closest to `average`
fn nearest_bitrate(average: f64, header: &FrameHeader) -> u32 {
    header
        .bitrates()
        .iter()
        .copied()
        .filter(|&bitrate| bitrate != 0)
        .min_by(|a, b| {
            (f64::from(*a) - average)
                .abs()
                .total_cmp(&(f64::from(*b) - average).abs())
        })
        .unwrap_or(header.bitrate)
}
