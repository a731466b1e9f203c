//! WAV audio format support
//!
//! This module implements RIFF/WAVE parsing for 16-bit PCM files. The whole
//! file is held in memory; chunks are borrowed slices of that buffer.

pub mod chunk;
pub mod decoder;
pub mod header;

pub use chunk::{ChunkReader, RiffChunk};
pub use decoder::{decode, decode_file};
pub use header::{FormatTag, PcmFormat};

use byteorder::{ByteOrder, LittleEndian};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the RIFF/WAVE preamble ("RIFF", size, "WAVE")
pub const RIFF_HEADER_SIZE: usize = 12;

/// Size of a chunk header (4 byte ID + 4 byte size)
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Chunk header (4 byte ID + 4 byte size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    /// Read a chunk header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < CHUNK_HEADER_SIZE {
            return None;
        }

        let mut id = [0u8; 4];
        id.copy_from_slice(&bytes[0..4]);

        let size = LittleEndian::read_u32(&bytes[4..8]);

        Some(ChunkHeader { id, size })
    }
}
