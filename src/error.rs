//! Error types for color parsing and animation decoding.

use thiserror::Error;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexFormatReason {
    /// The digit count (after trimming and removing `#`) was not 6 or 8.
    WrongLength(usize),
    /// A character outside `0-9A-F` was found.
    NonHexDigit(char),
}

impl std::fmt::Display for HexFormatReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength(len) => write!(f, "expected 6 or 8 hex digits, got {len}"),
            Self::NonHexDigit(ch) => write!(f, "'{ch}' is not a hex digit"),
        }
    }
}

/// Errors produced by [`parse_hex`](crate::parse_hex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidFormat {
        input: String,
        reason: HexFormatReason,
    },
}

/// Errors produced while turning a GIF container into frames.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes could not be read as a GIF container.
    #[error("unreadable animation container: {0}")]
    Container(#[from] image::ImageError),

    /// The container was readable but held no frames.
    #[error("animation container has no frames")]
    NoFrames,
}
