//! Whole-buffer WAV decoding

use super::chunk::ChunkReader;
use super::header::PcmFormat;
use super::{DATA_CHUNK, FMT_CHUNK};
use crate::codec::{DecodedAudio, PcmDecoder};
use crate::error::{Error, Result};
use std::path::Path;

/// Decode an in-memory RIFF/WAVE buffer
///
/// Every chunk is visited. `fmt ` payloads are parsed and validated as they
/// are met, `data` payloads are kept, anything else is skipped. When a tag
/// repeats, the later chunk wins. Any failure discards the whole decode.
pub fn decode(data: &[u8]) -> Result<DecodedAudio> {
    let mut format: Option<PcmFormat> = None;
    let mut payload: Option<&[u8]> = None;

    for chunk in ChunkReader::new(data)? {
        let chunk = chunk?;
        if chunk.is(FMT_CHUNK) {
            format = Some(PcmFormat::from_chunk(&chunk)?);
        } else if chunk.is(DATA_CHUNK) {
            payload = Some(chunk.payload);
        } else {
            tracing::debug!(
                "skipping '{}' chunk ({} bytes) at offset {}",
                chunk.id_str(),
                chunk.size,
                chunk.offset
            );
        }
    }

    let format = format.ok_or(Error::MissingFmtChunk)?;
    let payload = payload.ok_or(Error::MissingDataChunk)?;

    let audio = PcmDecoder::new(format).decode(payload);
    tracing::debug!(
        "decoded {} ({} samples, {:.2}s)",
        audio.format,
        audio.samples.len(),
        audio.duration_seconds()
    );
    Ok(audio)
}

/// Read a file fully into memory and decode it
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedAudio> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes)
}
