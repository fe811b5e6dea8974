use serde::{Deserialize, Serialize};

/// How far the MP3 analyzer scans the stream
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Trust a Xing/Info header if there is one, otherwise sample 50 frames (100 for VBR)
    /// and extrapolate
    #[default]
    Fast,
    /// Walk every frame up to the end of the stream
    Exhaustive,
}

impl ScanMode {
    /// Number of frames to sample, `None` for no limit
    pub fn frame_limit(self, vbr: bool) -> Option<usize> {
        match self {
            Self::Fast if vbr => Some(100),
            Self::Fast => Some(50),
            Self::Exhaustive => None,
        }
    }
}

/// Options for [`read_from_with`](crate::read_from_with)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct ReadOptions {
    pub scan_mode: ScanMode,
    /// Run the MP3 analyzer after an ID3v2 tag to fill the `stream_*` items
    pub analyze_stream: bool,
    /// Deepest MP4 atom nesting that is followed before giving up
    pub max_atom_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::Fast,
            analyze_stream: true,
            max_atom_depth: 16,
        }
    }
}
