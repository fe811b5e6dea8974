//! Builders for synthetic audio streams

/// MPEG 1 Layer III, 128 kbps, 44100 Hz, joint stereo
pub const MPEG_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x40];
pub const MPEG_FRAME_LEN: usize = 417;

#[macro_export]
macro_rules! read {
    ($data:expr) => {{
        tagscanlib::read_from(&mut std::io::Cursor::new($data))
    }};
}

#[macro_export]
macro_rules! verify_title {
    ($data:expr, $format:path, $expected:literal) => {{
        let metadata = $crate::read!($data).unwrap();
        assert_eq!(metadata.format(), $format);
        assert_eq!(metadata.title(), $expected);
        metadata
    }};
}

pub fn synchsafe(size: usize) -> [u8; 4] {
    [
        ((size >> 21) & 0x7F) as u8,
        ((size >> 14) & 0x7F) as u8,
        ((size >> 7) & 0x7F) as u8,
        (size & 0x7F) as u8,
    ]
}

/// `n` CBR frames of padding bytes
pub fn mpeg_frames(n: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(n * MPEG_FRAME_LEN);
    for _ in 0..n {
        let start = data.len();
        data.extend_from_slice(&MPEG_HEADER);
        data.resize(start + MPEG_FRAME_LEN, 0x55);
    }
    data
}

/// A text frame with a UTF-8 encoding byte
pub fn text_frame(version: u8, name: &str, text: &str) -> Vec<u8> {
    let mut content = vec![3];
    content.extend_from_slice(text.as_bytes());
    frame(version, name, &content)
}

pub fn frame(version: u8, name: &str, content: &[u8]) -> Vec<u8> {
    let mut frame = name.as_bytes().to_vec();
    match version {
        2 => frame.extend_from_slice(&(content.len() as u32).to_be_bytes()[1..]),
        3 => {
            frame.extend_from_slice(&(content.len() as u32).to_be_bytes());
            frame.extend_from_slice(&[0, 0]);
        }
        _ => {
            frame.extend_from_slice(&synchsafe(content.len()));
            frame.extend_from_slice(&[0, 0]);
        }
    }
    frame.extend_from_slice(content);
    frame
}

/// An ID3v2 tag of the given version holding `frames`, followed by `padding` zero bytes
pub fn id3v2_tag(version: u8, frames: &[Vec<u8>], padding: usize) -> Vec<u8> {
    let mut body = frames.concat();
    body.resize(body.len() + padding, 0);

    let mut tag = vec![b'I', b'D', b'3', version, 0, 0];
    tag.extend_from_slice(&synchsafe(body.len()));
    tag.extend(body);
    tag
}

/// ID3v1.1 trailer
pub fn id3v1_trailer(title: &str, artist: &str, track: u8, genre: u8) -> Vec<u8> {
    let field = |value: &str, len: usize| {
        let mut field = value.as_bytes().to_vec();
        field.resize(len, 0);
        field
    };

    let mut trailer = b"TAG".to_vec();
    trailer.extend(field(title, 30));
    trailer.extend(field(artist, 30));
    trailer.extend(field("Album", 30));
    trailer.extend(field("1999", 4));
    trailer.extend(field("Comment", 28));
    trailer.extend_from_slice(&[0, track, genre]);
    trailer
}

/// Vendor string and comments as stored in FLAC and OGG
pub fn vorbis_comments(vendor: &str, comments: &[&str]) -> Vec<u8> {
    let mut data = (vendor.len() as u32).to_le_bytes().to_vec();
    data.extend_from_slice(vendor.as_bytes());
    data.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for comment in comments {
        data.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        data.extend_from_slice(comment.as_bytes());
    }
    data
}

/// A FLAC picture block, also the payload of `METADATA_BLOCK_PICTURE`
pub fn flac_picture(picture_type: u32, mime_type: &str, data: &[u8]) -> Vec<u8> {
    let mut block = picture_type.to_be_bytes().to_vec();
    block.extend_from_slice(&(mime_type.len() as u32).to_be_bytes());
    block.extend_from_slice(mime_type.as_bytes());
    block.extend_from_slice(&0_u32.to_be_bytes());
    block.extend_from_slice(&[0; 16]);
    block.extend_from_slice(&(data.len() as u32).to_be_bytes());
    block.extend_from_slice(data);
    block
}

/// A FLAC stream made of `(type, content)` blocks, the last one flagged, then `audio`
pub fn flac_file(blocks: &[(u8, Vec<u8>)], audio: &[u8]) -> Vec<u8> {
    let mut data = b"fLaC".to_vec();
    for (idx, (ty, content)) in blocks.iter().enumerate() {
        let last = idx + 1 == blocks.len();
        data.push(if last { ty | 0x80 } else { *ty });
        data.extend_from_slice(&(content.len() as u32).to_be_bytes()[1..]);
        data.extend_from_slice(content);
    }
    data.extend_from_slice(audio);
    data
}

pub fn ogg_page(header_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut page = b"OggS\x00".to_vec();
    page.push(header_type);
    page.extend_from_slice(&[0; 20]);

    let mut segments = vec![255_u8; payload.len() / 255];
    segments.push((payload.len() % 255) as u8);
    page.push(segments.len() as u8);
    page.extend(segments);
    page.extend_from_slice(payload);
    page
}

/// An OGG Vorbis stream with the comment packet split into pages of `page_len` bytes
pub fn ogg_file(comments: &[&str], page_len: usize) -> Vec<u8> {
    let mut identification = b"\x01vorbis".to_vec();
    identification.resize(30, 0);
    let mut data = ogg_page(0x02, &identification);

    let mut packet = b"\x03vorbis".to_vec();
    packet.extend(vorbis_comments("tagscan tests", comments));
    for (idx, chunk) in packet.chunks(page_len).enumerate() {
        data.extend(ogg_page(u8::from(idx > 0), chunk));
    }

    // setup header and audio
    data.extend(ogg_page(0, b"\x05vorbis"));
    data.extend(ogg_page(0, &[0xAA; 64]));
    data
}

pub fn atom(ident: &[u8; 4], content: &[u8]) -> Vec<u8> {
    let mut atom = ((content.len() + 8) as u32).to_be_bytes().to_vec();
    atom.extend_from_slice(ident);
    atom.extend_from_slice(content);
    atom
}

pub fn data_atom(class: u8, value: &[u8]) -> Vec<u8> {
    let mut content = vec![0, 0, 0, class, 0, 0, 0, 0];
    content.extend_from_slice(value);
    atom(b"data", &content)
}

/// A `----` item in the `com.apple.iTunes` namespace
pub fn freeform(name: &str, values: &[&str]) -> Vec<u8> {
    let mut mean = vec![0; 4];
    mean.extend_from_slice(b"com.apple.iTunes");
    let mut name_content = vec![0; 4];
    name_content.extend_from_slice(name.as_bytes());

    let mut content = atom(b"mean", &mean);
    content.extend(atom(b"name", &name_content));
    for value in values {
        content.extend(data_atom(1, value.as_bytes()));
    }
    atom(b"----", &content)
}

/// An M4A file with an AAC track, the `ilst` items and `audio` as `mdat`
pub fn mp4_file(items: &[Vec<u8>], audio: &[u8]) -> Vec<u8> {
    let mut stsd = vec![0, 0, 0, 0, 0, 0, 0, 1];
    stsd.extend(atom(b"mp4a", &[0; 28]));
    let trak = atom(
        b"trak",
        &atom(b"mdia", &atom(b"minf", &atom(b"stbl", &atom(b"stsd", &stsd)))),
    );

    let mut meta = vec![0; 4];
    meta.extend(atom(b"ilst", &items.concat()));
    let udta = atom(b"udta", &atom(b"meta", &meta));

    let mut moov = trak;
    moov.extend(udta);

    let mut data = atom(b"ftyp", b"M4A \x00\x00\x02\x00isomiso2");
    data.extend(atom(b"moov", &moov));
    data.extend(atom(b"mdat", audio));
    data
}
