//! Container format handling
//!
//! Only the RIFF/WAVE container is understood, and only the uncompressed
//! 16-bit PCM profile of it.

pub mod wav;

use std::path::Path;

pub use wav::{decode, decode_file, ChunkReader, PcmFormat, RiffChunk};

/// Detect format from file extension
///
/// A dotfile such as `.wav` has no extension and is not detected.
pub fn detect_format_from_extension(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("wav") || ext.eq_ignore_ascii_case("wave") {
        Some("wav")
    } else {
        None
    }
}
