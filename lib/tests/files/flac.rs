use crate::util::{flac_file, flac_picture, vorbis_comments};
use crate::{read, verify_title};
use base64::{engine::general_purpose, Engine as _};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tagscanlib::{Accessor, ErrorKind, FileType, Format, Metadata, PictureType};

fn stream_info() -> Vec<u8> {
    let mut block = vec![0x10, 0x00, 0x10, 0x00, 0, 0, 0, 0, 0, 0];
    // 48000 Hz, 2 channels, 24 bits, 96000 samples
    let info: u64 = (48000 << 44) | (1 << 41) | (23 << 36) | 96_000;
    block.extend_from_slice(&info.to_be_bytes());
    block.extend_from_slice(&[0; 16]);
    block
}

#[test]
fn read_title() {
    let data = flac_file(&[(4, vorbis_comments("", &["TITLE=Test Title"]))], &[]);
    let metadata = verify_title!(data, Format::Flac, "Test Title");
    assert_eq!(metadata.file_type(), FileType::Flac);
}

#[test]
fn read_blocks() {
    let cover = flac_picture(3, "image/jpeg", &[0xFF, 0xD8, 0xFF]);
    let comment_cover = format!(
        "METADATA_BLOCK_PICTURE={}",
        general_purpose::STANDARD.encode(flac_picture(4, "image/png", &[0x89]))
    );

    let blocks = [
        (0, stream_info()),
        (3, vec![0; 18]),
        (
            4,
            vorbis_comments(
                "reference libFLAC 1.3.2",
                &[
                    "TITLE=Flac",
                    "ALBUMARTIST=Band",
                    "DATE=2019",
                    "TRACKNUMBER=5",
                    "TOTALTRACKS=9",
                    &comment_cover,
                ],
            ),
        ),
        (6, cover),
        (1, vec![0; 1024]),
    ];
    let data = flac_file(&blocks, &[0xFF, 0xF8, 0x69, 0x08]);

    let Metadata::Flac(tag) = read!(data).unwrap() else {
        panic!("not a FLAC tag");
    };
    assert_eq!(tag.album_artist(), "Band");
    assert_eq!(tag.year(), 2019);
    assert_eq!(tag.track(), (5, 9));
    assert_eq!(tag.comments().vendor(), "reference libFLAC 1.3.2");

    let stream_info = tag.stream_info();
    assert_eq!(stream_info.sample_rate, 48000);
    assert_eq!(stream_info.channels, 2);
    assert_eq!(stream_info.bits_per_sample, 24);
    assert_eq!(stream_info.duration(), Duration::from_secs(2));

    let pictures = tag.pictures();
    assert_eq!(pictures.len(), 2);
    assert_eq!(pictures[0].picture_type(), PictureType::CoverFront);
    assert_eq!(pictures[0].extension(), "jpg");
    assert_eq!(pictures[1].picture_type(), PictureType::CoverBack);
    assert_eq!(tag.picture(), Some(&pictures[0]));
}

#[test]
fn invalid_blocks() {
    let data = flac_file(&[(127, vec![0; 4])], &[]);
    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::MalformedStructure);

    let data = flac_file(&[(4, vorbis_comments("", &["NOVALUE"]))], &[]);
    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::MalformedStructure);

    let data = flac_file(&[(6, flac_picture(21, "image/png", &[]))], &[]);
    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::MalformedStructure);
}

#[test]
fn reserved_blocks_are_skipped() {
    let blocks = [(9, vec![1, 2, 3]), (4, vorbis_comments("", &["TITLE=After"]))];
    verify_title!(flac_file(&blocks, &[]), Format::Flac, "After");
}
