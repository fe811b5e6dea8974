use crate::util::{frame, id3v1_trailer, id3v2_tag, mpeg_frames, text_frame};
use crate::{read, verify_title};
use pretty_assertions::assert_eq;
use tagscanlib::{
    Accessor, Comm, ErrorKind, FileType, Format, PictureType, ReadOptions, ScanMode, TagError,
    TagValue,
};

#[test]
fn read_id3v2_3() {
    let data = id3v2_tag(3, &[text_frame(3, "TIT2", "Hello")], 0);
    let metadata = verify_title!(data, Format::Id3v2_3, "Hello");
    assert_eq!(metadata.file_type(), FileType::Mp3);
}

#[test]
fn read_id3v2_4_items() {
    let frames = [
        text_frame(4, "TIT2", "Title"),
        text_frame(4, "TPE1", "Artist"),
        text_frame(4, "TALB", "Album"),
        text_frame(4, "TDRC", "2004-11-20"),
        text_frame(4, "TRCK", "3/12"),
        text_frame(4, "TPOS", "1/2"),
        text_frame(4, "TCON", "(17)Test"),
        frame(4, "COMM", b"\x03eng\x00A comment"),
        frame(4, "USLT", b"\x03eng\x00Some lyrics"),
        frame(4, "TXXX", b"\x03CATALOGNUMBER\x00ABC-123"),
    ];
    let data = id3v2_tag(4, &frames, 64);

    let metadata = verify_title!(data, Format::Id3v2_4, "Title");
    assert_eq!(metadata.artist(), "Artist");
    assert_eq!(metadata.album(), "Album");
    assert_eq!(metadata.year(), 2004);
    assert_eq!(metadata.track(), (3, 12));
    assert_eq!(metadata.disc(), (1, 2));
    assert_eq!(metadata.genre(), "Rock Test");
    assert_eq!(metadata.comment(), "A comment");
    assert_eq!(metadata.lyrics(), "Some lyrics");
    assert_eq!(
        metadata.raw().get("TXXX"),
        Some(&TagValue::Comment(Comm {
            language: String::new(),
            description: "CATALOGNUMBER".to_string(),
            text: "ABC-123".to_string(),
        }))
    );
}

#[test]
fn read_id3v2_2() {
    let frames = [
        frame(2, "TT2", b"\x00Old title"),
        frame(2, "TP1", b"\x00Old artist"),
        frame(2, "PIC", b"\x00PNG\x03\x00\x89PNG"),
    ];
    let data = id3v2_tag(2, &frames, 0);

    let metadata = verify_title!(data, Format::Id3v2_2, "Old title");
    assert_eq!(metadata.artist(), "Old artist");

    let picture = metadata.picture().unwrap();
    assert_eq!(picture.mime_type(), "image/png");
    assert_eq!(picture.extension(), "png");
    assert_eq!(picture.picture_type(), PictureType::CoverFront);
    assert_eq!(picture.data(), b"\x89PNG");
}

#[test]
fn read_stream_information() {
    let mut data = id3v2_tag(3, &[text_frame(3, "TIT2", "Hello")], 16);
    data.extend(mpeg_frames(20));

    let metadata = read!(data.clone()).unwrap();
    let raw = metadata.raw();
    assert_eq!(
        raw.get("stream_type"),
        Some(&TagValue::Text("MPEG 1 Layer III".to_string()))
    );
    assert_eq!(
        raw.get("stream_bitrate"),
        Some(&TagValue::Text("128 kbps CBR".to_string()))
    );
    assert_eq!(
        raw.get("stream_audio"),
        Some(&TagValue::Text("44100 Hz Joint Stereo".to_string()))
    );
    assert_eq!(raw.get("stream_size"), Some(&TagValue::Integer(20 * 417)));
    assert_eq!(raw.get("stream_length"), Some(&TagValue::Integer(0)));

    let options = ReadOptions {
        scan_mode: ScanMode::Exhaustive,
        analyze_stream: false,
        ..ReadOptions::default()
    };
    let metadata =
        tagscanlib::read_from_with(&mut std::io::Cursor::new(data), &options).unwrap();
    assert!(!metadata.raw().contains_key("stream_type"));
}

#[test]
fn read_id3v1() {
    let mut data = mpeg_frames(2);
    data.extend(id3v1_trailer("V1 title", "V1 artist", 7, 17));

    let metadata = verify_title!(data, Format::Id3v1, "V1 title");
    assert_eq!(metadata.artist(), "V1 artist");
    assert_eq!(metadata.year(), 1999);
    assert_eq!(metadata.track(), (7, 0));
    assert_eq!(metadata.genre(), "Rock");
    assert_eq!(metadata.comment(), "Comment");
}

#[test]
fn no_tags() {
    let err = read!(mpeg_frames(2)).unwrap_err();
    assert!(matches!(err, TagError::NoTagsFound));
    assert_eq!(err.kind(), ErrorKind::NoTagsFound);
}

#[test]
fn truncated_tag() {
    let mut data = id3v2_tag(3, &[text_frame(3, "TIT2", "Hello")], 0);
    data.truncate(data.len() - 3);

    let err = read!(data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);
}

#[test]
fn malformed_input_does_not_panic() {
    let data = [
        0x49, 0x44, 0x33, 0x03, 0x00, 0x40, 0x00, 0x00, 0x00, 0x0E, 0xDB, 0xDB, 0xDB, 0xDB, 0xDB,
        0xDB, 0xDB, 0x06, 0xFF, 0x54, 0x58, 0x58, 0x00,
    ];
    assert!(read!(data.to_vec()).is_err());

    // every prefix of a valid tag
    let valid = id3v2_tag(3, &[text_frame(3, "TIT2", "Hello")], 0);
    for len in 0..valid.len() {
        assert!(read!(valid[..len].to_vec()).is_err());
    }
}

#[test]
fn identify_id3() {
    let data = id3v2_tag(4, &[], 10);
    assert_eq!(
        tagscanlib::identify(&mut std::io::Cursor::new(data)).unwrap(),
        (Format::Id3v2_4, FileType::Mp3)
    );
}
