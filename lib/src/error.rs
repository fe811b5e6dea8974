//! Errors that can occur while decoding tags
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;

use thiserror::Error;

/// Result type for every decoding operation in this crate
pub type Result<T> = std::result::Result<T, TagError>;

/// Coarse classification of a [`TagError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The magic bytes did not match the chosen dialect
    FormatMismatch,
    /// No recognized tag envelope exists in the stream
    NoTagsFound,
    /// The stream ended in the middle of a structure
    Truncated,
    /// The bytes are present but do not form a valid structure
    MalformedStructure,
    /// A feature of the format that is not decoded
    UnsupportedFeature,
    /// Any other I/O failure
    Io,
}

/// Errors that could occur while reading tags
#[derive(Debug, Error)]
pub enum TagError {
    // Detection
    /// The stream does not start with the expected signature
    #[error("Expected a {expected} signature")]
    FormatMismatch { expected: &'static str },
    /// None of the supported tag formats were found
    #[error("No tags found")]
    NoTagsFound,
    /// The stream carries no `TAG` trailer
    #[error("No ID3v1 trailer found")]
    NotId3v1,

    // Data
    /// The stream ended early
    #[error("Unexpected end of stream while reading {0}")]
    Truncated(&'static str),
    /// An ID3v2 text encoding byte outside of 0..=3
    #[error("Invalid text encoding: {0:#04x}")]
    InvalidEncoding(u8),
    /// A UTF-16 string without a valid byte order mark
    #[error("Invalid UTF-16 byte order mark: [{0:#04x}, {1:#04x}]")]
    InvalidBom(u8, u8),
    /// A vorbis comment without `=`
    #[error("Vorbis comment is missing the '=' separator")]
    MalformedComment,
    /// A picture type code outside of the known list
    #[error("Invalid picture type: {0}")]
    InvalidPictureType(u32),
    /// An MP4 `data` atom with an unknown content class
    #[error("Invalid MP4 content class: {0}")]
    InvalidContentClass(u32),
    /// Structural corruption
    #[error("Malformed data at {position}: {description} - {details}")]
    Malformed {
        description: String,
        details: String,
        position: ErrorPosition,
    },
    /// A feature that is recognized but not decoded
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    /// Any other I/O error
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for TagError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            return Self::Truncated("stream");
        }

        Self::Io(err)
    }
}

impl TagError {
    /// Create a [`TagError::Malformed`] with position information
    pub fn malformed(
        description: impl Into<String>,
        details: impl Into<String>,
        position: ErrorPosition,
    ) -> Self {
        Self::Malformed {
            description: description.into(),
            details: details.into(),
            position,
        }
    }

    /// Create a [`TagError::Malformed`] where the position is unknown
    pub fn malformed_simple(description: impl Into<String>, details: impl Into<String>) -> Self {
        Self::malformed(description, details, ErrorPosition::default())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FormatMismatch { .. } => ErrorKind::FormatMismatch,
            Self::NoTagsFound | Self::NotId3v1 => ErrorKind::NoTagsFound,
            Self::Truncated(_) => ErrorKind::Truncated,
            Self::InvalidEncoding(_)
            | Self::InvalidBom(..)
            | Self::MalformedComment
            | Self::InvalidPictureType(_)
            | Self::InvalidContentClass(_)
            | Self::Malformed { .. } => ErrorKind::MalformedStructure,
            Self::UnsupportedFeature(_) => ErrorKind::UnsupportedFeature,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Position information for structural errors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorPosition {
    /// Byte offset in the stream (or in the tag body) where the error occurred
    pub offset: u64,
    /// Human-readable description of the position
    pub description: String,
}

impl ErrorPosition {
    pub fn new(offset: u64) -> Self {
        Self {
            offset,
            description: format!("byte offset {offset}"),
        }
    }

    /// Set a custom description for the error position
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Display for ErrorPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.description.is_empty() {
            return write!(f, "unknown position");
        }
        write!(f, "{}", self.description)
    }
}
