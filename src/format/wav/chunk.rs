//! RIFF chunk walking
//!
//! [`ChunkReader`] validates the `RIFF....WAVE` preamble and then yields
//! every chunk in the buffer in order. Declared chunk sizes are checked
//! against the bytes actually present; a chunk that would run past the end
//! of the buffer is reported as [`Error::TruncatedChunk`] and ends the walk.

use super::{ChunkHeader, CHUNK_HEADER_SIZE, RIFF_HEADER_SIZE, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// A single chunk borrowed from the container buffer
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RiffChunk<'a> {
    /// Four-character chunk tag
    pub id: [u8; 4],
    /// Declared payload size
    pub size: u32,
    /// Byte offset of the chunk header within the buffer
    pub offset: usize,
    /// Payload bytes (exactly `size` long)
    pub payload: &'a [u8],
}

impl RiffChunk<'_> {
    /// Chunk tag as text, with invalid bytes replaced
    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }

    /// Check the chunk tag
    pub fn is(&self, id: &[u8; 4]) -> bool {
        &self.id == id
    }
}

impl fmt::Debug for RiffChunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiffChunk")
            .field("id", &self.id_str())
            .field("size", &self.size)
            .field("offset", &self.offset)
            .finish()
    }
}

/// Iterator over the chunks of a RIFF/WAVE buffer
pub struct ChunkReader<'a> {
    data: &'a [u8],
    position: usize,
    riff_size: u32,
    done: bool,
}

impl<'a> ChunkReader<'a> {
    /// Validate the RIFF/WAVE preamble and position the reader on the
    /// first chunk
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if data.len() < 4 || &data[0..4] != RIFF_MAGIC {
            return Err(Error::NotRiff);
        }

        if data.len() < RIFF_HEADER_SIZE || &data[8..12] != WAVE_MAGIC {
            return Err(Error::NotWave);
        }

        // Informational only; the chunk walk is bounded by the buffer itself
        let riff_size = LittleEndian::read_u32(&data[4..8]);

        Ok(ChunkReader {
            data,
            position: RIFF_HEADER_SIZE,
            riff_size,
            done: false,
        })
    }

    /// Current read offset
    pub fn position(&self) -> usize {
        self.position
    }

    /// RIFF size field as stored in the file (total size - 8)
    pub fn riff_size(&self) -> u32 {
        self.riff_size
    }

    fn read_chunk(&mut self) -> Result<RiffChunk<'a>> {
        let offset = self.position;
        let remaining = &self.data[offset..];

        let header = match ChunkHeader::from_bytes(remaining) {
            Some(header) => header,
            None => {
                let id_len = remaining.len().min(4);
                return Err(Error::truncated(
                    &remaining[..id_len],
                    offset,
                    CHUNK_HEADER_SIZE as u64,
                    remaining.len(),
                ));
            }
        };

        let available = remaining.len() - CHUNK_HEADER_SIZE;
        if u64::from(header.size) > available as u64 {
            return Err(Error::truncated(
                &header.id,
                offset,
                u64::from(header.size),
                available,
            ));
        }

        let start = offset + CHUNK_HEADER_SIZE;
        let end = start + header.size as usize;
        self.position = end;

        Ok(RiffChunk {
            id: header.id,
            size: header.size,
            offset,
            payload: &self.data[start..end],
        })
    }
}

impl<'a> Iterator for ChunkReader<'a> {
    type Item = Result<RiffChunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.position >= self.data.len() {
            return None;
        }

        let chunk = self.read_chunk();
        match &chunk {
            Ok(c) => tracing::trace!("chunk {:?}", c),
            Err(_) => self.done = true,
        }
        Some(chunk)
    }
}

impl std::iter::FusedIterator for ChunkReader<'_> {}
