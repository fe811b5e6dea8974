use crate::util::{flac_picture, ogg_file};
use crate::{read, verify_title};
use base64::{engine::general_purpose, Engine as _};
use pretty_assertions::assert_eq;
use tagscanlib::{Accessor, ErrorKind, FileType, Format};

#[test]
fn read_comments() {
    let data = ogg_file(
        &["TITLE=Ogg", "PERFORMER=Orchestra", "ARTIST=Composer", "DISCNUMBER=2/3"],
        4096,
    );

    let metadata = verify_title!(data, Format::Vorbis, "Ogg");
    assert_eq!(metadata.file_type(), FileType::Ogg);
    assert_eq!(metadata.artist(), "Orchestra");
    assert_eq!(metadata.composer(), "Composer");
    assert_eq!(metadata.disc(), (2, 3));
}

#[test]
fn read_comments_across_pages() {
    let cover = format!(
        "METADATA_BLOCK_PICTURE={}",
        general_purpose::STANDARD.encode(flac_picture(3, "image/png", &[0x42; 2000]))
    );
    let data = ogg_file(&["TITLE=Split", &cover], 300);

    let metadata = verify_title!(data, Format::Vorbis, "Split");
    let picture = metadata.picture().unwrap();
    assert_eq!(picture.data().len(), 2000);
    assert_eq!(picture.mime_type(), "image/png");
}

#[test]
fn truncated_stream() {
    let mut data = ogg_file(&["TITLE=Cut"], 4096);
    // identification page (58 bytes) and part of the comment page
    data.truncate(70);

    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::Truncated);
}
