mod checksum;
mod flac;
mod mp4;
mod mpeg;
mod musicbrainz;
mod ogg;
mod util;
