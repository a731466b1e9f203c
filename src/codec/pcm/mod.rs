//! PCM (Pulse Code Modulation) codec
//!
//! PCM is uncompressed audio, the simplest and most straightforward codec.
//! This module turns a raw little-endian 16-bit payload into samples.

pub mod decoder;

pub use decoder::{extract_samples, PcmDecoder};

/// Bytes per sample for a single channel
pub const BYTES_PER_SAMPLE: usize = 2;

/// Number of whole samples in a payload of `bytes` bytes
///
/// A trailing odd byte does not form a sample and is not counted.
pub fn samples_from_bytes(bytes: usize) -> usize {
    bytes / BYTES_PER_SAMPLE
}
