//! ID3v1 and ID3v2 tags
pub mod v1;
pub mod v2;
