use crate::util::{atom, data_atom, flac_file, frame, freeform, id3v2_tag, mp4_file, vorbis_comments};
use crate::read;
use pretty_assertions::assert_eq;
use tagscanlib::musicbrainz::{extract, MusicBrainzInfo, UFID_PROVIDER};

const RECORDING: &str = "b1a9c0e9-d987-4042-ae91-78d6a3267d69";
const ALBUM: &str = "0d3fbd46-0c07-4c7a-9d4f-4a8b35d7cd2e";

fn user_text(version: u8, name: &str, description: &str, value: &str) -> Vec<u8> {
    let content = format!("\x03{description}\x00{value}");
    frame(version, name, content.as_bytes())
}

fn ufid(version: u8, name: &str, provider: &str, id: &str) -> Vec<u8> {
    let content = format!("{provider}\x00{id}");
    frame(version, name, content.as_bytes())
}

#[test]
fn id3v2_frames() {
    let frames = [
        user_text(4, "TXXX", "MusicBrainz Album Id", ALBUM),
        user_text(4, "TXXX", "MusicBrainz Artist Id", "artist-id"),
        user_text(4, "TXXX", "Acoustid Id", "acoustid"),
        ufid(4, "UFID", "http://example.com", "ignored"),
        ufid(4, "UFID", UFID_PROVIDER, RECORDING),
    ];
    let metadata = read!(id3v2_tag(4, &frames, 0)).unwrap();

    assert_eq!(
        extract(&metadata),
        MusicBrainzInfo {
            acoustid: "acoustid".to_string(),
            album: ALBUM.to_string(),
            artist: "artist-id".to_string(),
            track: RECORDING.to_string(),
            ..MusicBrainzInfo::default()
        }
    );
}

#[test]
fn id3v2_2_frames() {
    let frames = [
        user_text(2, "TXX", "MusicBrainz Release Group Id", "group"),
        ufid(2, "UFI", UFID_PROVIDER, RECORDING),
    ];
    let metadata = read!(id3v2_tag(2, &frames, 0)).unwrap();

    let info = extract(&metadata);
    assert_eq!(info.release_group, "group");
    assert_eq!(info.track, RECORDING);
}

#[test]
fn vorbis_comments_keys() {
    let comments = vorbis_comments(
        "",
        &[
            "MUSICBRAINZ_ALBUMID=album",
            "MUSICBRAINZ_ALBUMARTISTID=album-artist",
            "MUSICBRAINZ_TRACKID=track",
        ],
    );
    let metadata = read!(flac_file(&[(4, comments)], &[])).unwrap();

    assert_eq!(
        extract(&metadata),
        MusicBrainzInfo {
            album: "album".to_string(),
            album_artist: "album-artist".to_string(),
            track: "track".to_string(),
            ..MusicBrainzInfo::default()
        }
    );
}

#[test]
fn mp4_freeform() {
    let items = [
        atom(b"\xA9nam", &data_atom(1, b"Title")),
        freeform("MusicBrainz Album Id", &[ALBUM]),
        freeform("MusicBrainz Track Id", &[RECORDING]),
    ];
    let metadata = read!(mp4_file(&items, &[])).unwrap();

    let info = extract(&metadata);
    assert_eq!(info.album, ALBUM);
    assert_eq!(info.track, RECORDING);
    assert!(info.acoustid.is_empty());
}

#[test]
fn untagged() {
    let comments = vorbis_comments("", &["TITLE=Nothing"]);
    let metadata = read!(flac_file(&[(4, comments)], &[])).unwrap();

    assert!(extract(&metadata).is_empty());
}

#[test]
fn ufid_overrides_user_text_track() {
    let txxx = user_text(4, "TXXX", "MusicBrainz Track Id", "from-user-text");
    let recording = ufid(4, "UFID", UFID_PROVIDER, RECORDING);

    for frames in [[txxx.clone(), recording.clone()], [recording, txxx]] {
        let metadata = read!(id3v2_tag(4, &frames, 0)).unwrap();
        assert_eq!(extract(&metadata).track, RECORDING);
    }
}

#[test]
fn recording_id_overrides_track_id() {
    for comments in [
        ["MUSICBRAINZ_TRACKID=track", "MUSICBRAINZ_RECORDINGID=recording"],
        ["MUSICBRAINZ_RECORDINGID=recording", "MUSICBRAINZ_TRACKID=track"],
    ] {
        let data = flac_file(&[(4, vorbis_comments("", &comments))], &[]);
        // the raw items are unordered, read a few times
        for _ in 0..16 {
            let metadata = read!(data.clone()).unwrap();
            assert_eq!(extract(&metadata).track, "recording");
        }
    }
}
