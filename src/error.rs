//! Error types for wavpeek

use crate::format::wav::FormatTag;
use thiserror::Error;

/// Result type alias for wavpeek operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavpeek
///
/// Every decode failure is scoped to a single file: callers report it and
/// move on to the next file.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer does not start with a RIFF tag
    #[error("Not a valid WAV file (missing RIFF header)")]
    NotRiff,

    /// RIFF container is not a WAVE profile
    #[error("Not a valid WAV file (missing WAVE header)")]
    NotWave,

    /// No `fmt ` chunk in the container
    #[error("Missing 'fmt ' chunk")]
    MissingFmtChunk,

    /// No `data` chunk in the container
    #[error("Missing 'data' chunk")]
    MissingDataChunk,

    /// Audio format tag other than uncompressed PCM
    #[error(
        "Unsupported format: only PCM supported (got {}, format tag {:#06x}){}",
        tag_name(.tag),
        .tag,
        fmt_location(.offset)
    )]
    UnsupportedFormat { tag: u16, offset: Option<usize> },

    /// Bits per sample other than 16
    #[error(
        "Unsupported bit depth: only 16-bit supported (got {}){}",
        .bits,
        fmt_location(.offset)
    )]
    UnsupportedBitDepth { bits: u16, offset: Option<usize> },

    /// Channel count outside {1, 2}
    #[error(
        "Unsupported channel count: only mono and stereo supported (got {}){}",
        .channels,
        fmt_location(.offset)
    )]
    UnsupportedChannelCount {
        channels: u16,
        offset: Option<usize>,
    },

    /// Chunk header or payload extends past the end of the buffer
    #[error(
        "Truncated chunk '{id}' at offset {offset}: needs {declared} bytes, {available} available"
    )]
    TruncatedChunk {
        id: String,
        offset: usize,
        declared: u64,
        available: usize,
    },

    /// `fmt ` payload shorter than the 16 bytes of a PCM format block
    #[error(
        "'fmt ' chunk too small: {} bytes, need at least 16{}",
        .size,
        fmt_location(.offset)
    )]
    FmtChunkTooSmall { size: usize, offset: Option<usize> },

    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

impl Error {
    /// Create a truncated chunk error from a raw chunk tag
    pub fn truncated(id: &[u8], offset: usize, declared: u64, available: usize) -> Self {
        Error::TruncatedChunk {
            id: String::from_utf8_lossy(id).into_owned(),
            offset,
            declared,
            available,
        }
    }

    /// Attach the offset of the `fmt ` chunk a format error came from
    ///
    /// Other errors are returned unchanged.
    pub fn at_fmt_offset(self, at: usize) -> Self {
        match self {
            Error::UnsupportedFormat { tag, .. } => Error::UnsupportedFormat {
                tag,
                offset: Some(at),
            },
            Error::UnsupportedBitDepth { bits, .. } => Error::UnsupportedBitDepth {
                bits,
                offset: Some(at),
            },
            Error::UnsupportedChannelCount { channels, .. } => Error::UnsupportedChannelCount {
                channels,
                offset: Some(at),
            },
            Error::FmtChunkTooSmall { size, .. } => Error::FmtChunkTooSmall {
                size,
                offset: Some(at),
            },
            other => other,
        }
    }

    /// Whether this error was produced while parsing the container
    /// (as opposed to reading the file or setting up the library)
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Init(_))
    }
}

fn tag_name(tag: &u16) -> FormatTag {
    FormatTag::from(*tag)
}

fn fmt_location(offset: &Option<usize>) -> String {
    match offset {
        Some(at) => format!(" in 'fmt ' chunk at offset {}", at),
        None => String::new(),
    }
}
