use crate::util::{
    flac_file, id3v1_trailer, id3v2_tag, mp4_file, mpeg_frames, text_frame, vorbis_comments,
};
use pretty_assertions::assert_eq;
use sha1::{Digest, Sha1};
use std::io::Cursor;
use tagscanlib::ErrorKind;

fn sum(data: &[u8]) -> String {
    tagscanlib::sum(&mut Cursor::new(data)).unwrap()
}

#[test]
fn mp3_sum_ignores_tags() {
    let audio = mpeg_frames(10);
    let expected = sum(&audio);
    assert_eq!(expected.len(), 40);

    let tag = id3v2_tag(3, &[text_frame(3, "TIT2", "Tagged")], 256);
    let trailer = id3v1_trailer("Tagged", "Artist", 1, 17);

    let with_id3v2 = [tag.clone(), audio.clone()].concat();
    let with_id3v1 = [audio.clone(), trailer.clone()].concat();
    let with_both = [tag, audio.clone(), trailer].concat();

    assert_eq!(sum(&with_id3v2), expected);
    assert_eq!(sum(&with_id3v1), expected);
    assert_eq!(sum(&with_both), expected);

    let retagged = [
        id3v2_tag(4, &[text_frame(4, "TIT2", "Another title")], 0),
        audio,
    ]
    .concat();
    assert_eq!(sum(&retagged), expected);
}

#[test]
fn audio_changes_the_sum() {
    let audio = mpeg_frames(4);
    let mut changed = audio.clone();
    changed[100] ^= 0xFF;

    assert_ne!(sum(&audio), sum(&changed));
}

#[test]
fn mp4_sum_ignores_tags() {
    let audio = [0x21_u8; 300];
    let plain = mp4_file(&[], &audio);
    let tagged = mp4_file(
        &[crate::util::atom(
            b"\xA9nam",
            &crate::util::data_atom(1, b"Title"),
        )],
        &audio,
    );

    assert_eq!(sum(&plain), sum(&tagged));
    assert_eq!(sum(&plain), sum(&audio));
}

#[test]
fn flac_sum_ignores_tags() {
    let audio = [0xFF, 0xF8, 0x69, 0x08, 0x00, 0x17];
    let plain = flac_file(&[(1, vec![0; 16])], &audio);
    let tagged = flac_file(
        &[
            (4, vorbis_comments("", &["TITLE=Tagged"])),
            (1, vec![0; 512]),
        ],
        &audio,
    );

    assert_eq!(sum(&plain), sum(&tagged));
    assert_eq!(sum(&plain), hex::encode(Sha1::digest(audio)));
}

#[test]
fn truncated_flac_block() {
    let mut data = flac_file(&[(1, vec![0; 64])], &[]);
    data.truncate(40);

    let err = tagscanlib::sum(&mut Cursor::new(data)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);
}

#[test]
fn truncated_id3v2_tag() {
    let mut data = id3v2_tag(3, &[], 1024);
    data.truncate(100);

    let err = tagscanlib::sum(&mut Cursor::new(data)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);
}
