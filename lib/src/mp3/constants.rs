/// Bitrates in kbps, indexed by `[MPEG 1 or 2/2.5][layer I, II, III][bitrate index]`
///
/// Index 0 (free format) and 15 (bad) are not valid frames.
pub const BITRATES: [[[u32; 16]; 3]; 2] = [
    [
        [0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0],
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0],
        [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0],
    ],
    [
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0],
    ],
];

/// Sample rates in Hz, indexed by `[MPEG 1, 2, 2.5][sample rate index]`
pub const SAMPLE_RATES: [[u32; 3]; 3] = [
    [44100, 48000, 32000],
    [22050, 24000, 16000],
    [11025, 12000, 8000],
];

/// Offset of a Xing/Info header from the end of the frame header,
/// indexed by `[MPEG 1 or 2/2.5][stereo, mono]`
pub const XING_OFFSETS: [[u64; 2]; 2] = [[32, 17], [17, 9]];

/// Offset of a VBRI header from the end of the frame header
pub const VBRI_OFFSET: u64 = 32;
