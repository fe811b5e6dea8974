//! MusicBrainz identifiers written by Picard
//!
//! See <https://picard.musicbrainz.org/docs/mappings/> for the names used by each format.
use serde::Serialize;

use crate::metadata::{Accessor, Metadata};
use crate::types::{Format, TagValue};

/// Owner of the `UFID` frame holding the recording id
pub const UFID_PROVIDER: &str = "http://musicbrainz.org";

/// MusicBrainz identifiers of a track, empty when not tagged
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MusicBrainzInfo {
    pub acoustid: String,
    pub album: String,
    pub album_artist: String,
    pub artist: String,
    pub release_group: String,
    pub track: String,
}

impl MusicBrainzInfo {
    /// Set the field for a Picard tag name, either the flat lowercase name or the
    /// `TXXX` description. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: &str) {
        let field = match name {
            "acoustid_id" | "Acoustid Id" => &mut self.acoustid,
            "musicbrainz_albumid" | "MusicBrainz Album Id" => &mut self.album,
            "musicbrainz_albumartistid" | "MusicBrainz Album Artist Id" => &mut self.album_artist,
            "musicbrainz_artistid" | "MusicBrainz Artist Id" => &mut self.artist,
            "musicbrainz_releasegroupid" | "MusicBrainz Release Group Id" => {
                &mut self.release_group
            }
            "musicbrainz_recordingid" | "musicbrainz_trackid" | "MusicBrainz Track Id" => {
                &mut self.track
            }
            _ => return,
        };
        *field = value.to_string();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Collect the MusicBrainz identifiers of decoded tags
pub fn extract(metadata: &Metadata) -> MusicBrainzInfo {
    match metadata.format() {
        Format::Id3v2_2 => extract_id3v2(metadata, "TXX", "UFI"),
        Format::Id3v2_3 | Format::Id3v2_4 => extract_id3v2(metadata, "TXXX", "UFID"),
        Format::Id3v1 | Format::Mp4 | Format::Vorbis | Format::Flac => extract_flat(metadata),
    }
}

/// Names looked up in formats with flat keys, in increasing precedence. MP4 freeform
/// items use the `TXXX` descriptions, Vorbis comments the lowercase names.
const FLAT_NAMES: [&str; 13] = [
    "Acoustid Id",
    "acoustid_id",
    "MusicBrainz Album Id",
    "musicbrainz_albumid",
    "MusicBrainz Album Artist Id",
    "musicbrainz_albumartistid",
    "MusicBrainz Artist Id",
    "musicbrainz_artistid",
    "MusicBrainz Release Group Id",
    "musicbrainz_releasegroupid",
    "MusicBrainz Track Id",
    "musicbrainz_trackid",
    "musicbrainz_recordingid",
];

/// User text frames carry the description as name, the recording id is a `UFID` frame.
///
/// Frames are applied in file order and the `UFID` recording id overrides a `TXXX` one.
fn extract_id3v2(metadata: &Metadata, txxx: &str, ufid: &str) -> MusicBrainzInfo {
    let mut info = MusicBrainzInfo::default();
    let mut recording = None;

    // `NAME`, `NAME_0`, ..., `NAME_10` in the order the frames were read
    let mut keys: Vec<&String> = metadata.raw().keys().collect();
    keys.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));

    for key in keys {
        match &metadata.raw()[key] {
            TagValue::Comment(comm) if key.starts_with(txxx) => {
                info.set(&comm.description, &comm.text);
            }
            TagValue::Ufid(id) if key.starts_with(ufid) && id.provider == UFID_PROVIDER => {
                recording = Some(id.identifier_text());
            }
            _ => {}
        }
    }

    if let Some(recording) = recording {
        info.track = recording;
    }

    info
}

fn extract_flat(metadata: &Metadata) -> MusicBrainzInfo {
    let mut info = MusicBrainzInfo::default();

    for name in FLAT_NAMES {
        if let Some(TagValue::Text(text)) = metadata.raw().get(name) {
            info.set(name, text);
        }
    }

    info
}
