use crate::util::{atom, data_atom, freeform, mp4_file};
use crate::{read, verify_title};
use pretty_assertions::assert_eq;
use tagscanlib::{Accessor, ErrorKind, FileType, Format, PictureType, ReadOptions, TagValue};

const PNG: &[u8] = b"\x89PNG\r\n\x1A\nimage";

#[test]
fn read_items() {
    let items = [
        atom(b"\xA9nam", &data_atom(1, b"M4A title")),
        atom(b"\xA9ART", &data_atom(1, b"Artist")),
        atom(b"aART", &data_atom(1, b"Album Artist")),
        atom(b"\xA9day", &data_atom(1, b"2008-04-01T07:00:00Z")),
        atom(b"trkn", &data_atom(0, &[0, 0, 0, 3, 0, 12, 0, 0])),
        atom(b"disk", &data_atom(0, &[0, 0, 0, 1, 0, 2])),
        atom(b"gnre", &data_atom(0, &[0, 18])),
        atom(b"tmpo", &data_atom(21, &[0, 120])),
        atom(b"covr", &data_atom(0, PNG)),
    ];
    let data = mp4_file(&items, &[0xAA; 32]);

    let metadata = verify_title!(data, Format::Mp4, "M4A title");
    assert_eq!(metadata.file_type(), FileType::Aac);
    assert_eq!(metadata.artist(), "Artist");
    assert_eq!(metadata.album_artist(), "Album Artist");
    assert_eq!(metadata.year(), 2008);
    assert_eq!(metadata.track(), (3, 12));
    assert_eq!(metadata.disc(), (1, 2));
    assert_eq!(metadata.genre(), "Rock");
    assert_eq!(metadata.raw().get("tmpo"), Some(&TagValue::Integer(120)));

    let picture = metadata.picture().unwrap();
    assert_eq!(picture.mime_type(), "image/png");
    assert_eq!(picture.picture_type(), PictureType::CoverFront);
    assert_eq!(picture.data(), PNG);
}

#[test]
fn read_freeform_items() {
    let items = [
        atom(b"\xA9nam", &data_atom(1, b"Freeform")),
        freeform("MusicBrainz Album Id", &["0d3fbd46-0c07-4c7a-9d4f-4a8b35d7cd2e"]),
        freeform("ARTISTS", &["One", "Two"]),
    ];
    let metadata = verify_title!(mp4_file(&items, &[]), Format::Mp4, "Freeform");

    assert_eq!(
        metadata.raw().get("MusicBrainz Album Id"),
        Some(&TagValue::Text(
            "0d3fbd46-0c07-4c7a-9d4f-4a8b35d7cd2e".to_string()
        ))
    );
    assert_eq!(
        metadata.raw().get("ARTISTS"),
        Some(&TagValue::Text("One;Two".to_string()))
    );
}

#[test]
fn itunes_store_genre() {
    let items = [
        atom(b"\xA9nam", &data_atom(1, b"Store")),
        atom(b"geID", &data_atom(21, &[0, 0, 0, 2])),
    ];
    let metadata = verify_title!(mp4_file(&items, &[]), Format::Mp4, "Store");
    assert_eq!(metadata.genre(), "Blues");
}

#[test]
fn invalid_items() {
    let data = mp4_file(&[atom(b"\xA9nam", &data_atom(7, b"bad class"))], &[]);
    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::MalformedStructure);

    let data = mp4_file(&[atom(b"covr", &data_atom(0, b"not a png"))], &[]);
    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::MalformedStructure);

    let data = mp4_file(&[atom(b"trkn", &data_atom(0, &[0, 0, 0, 3]))], &[]);
    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::MalformedStructure);
}

#[test]
fn atom_depth_limit() {
    let items = [atom(b"\xA9nam", &data_atom(1, b"Deep"))];
    let data = mp4_file(&items, &[]);

    let options = ReadOptions {
        max_atom_depth: 2,
        ..ReadOptions::default()
    };
    let err = tagscanlib::read_from_with(&mut std::io::Cursor::new(data), &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedStructure);
}

#[test]
fn atom_past_parent() {
    let mut data = mp4_file(&[atom(b"\xA9nam", &data_atom(1, b"Cut"))], &[0; 8]);
    // grow the mdat length past the end of the file
    let len = data.len();
    data[len - 16..len - 12].copy_from_slice(&64_u32.to_be_bytes());

    assert_eq!(read!(data).unwrap_err().kind(), ErrorKind::MalformedStructure);
}
