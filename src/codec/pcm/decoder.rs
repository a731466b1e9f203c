//! PCM decoder implementation

use super::{samples_from_bytes, BYTES_PER_SAMPLE};
use crate::codec::DecodedAudio;
use crate::format::PcmFormat;
use byteorder::{ByteOrder, LittleEndian};

/// Reinterpret a `data` payload as little-endian signed 16-bit samples
///
/// Produces `floor(len / 2)` samples. Interleaving is preserved as-is; the
/// channel layout is not consulted here.
pub fn extract_samples(data: &[u8]) -> Vec<i16> {
    let nb_samples = samples_from_bytes(data.len());
    let mut samples = vec![0i16; nb_samples];
    LittleEndian::read_i16_into(&data[..nb_samples * BYTES_PER_SAMPLE], &mut samples);
    samples
}

/// PCM decoder
///
/// PCM decoding is stateless; the decoder only carries the format the
/// samples will be tagged with.
#[derive(Debug, Clone, Copy)]
pub struct PcmDecoder {
    format: PcmFormat,
}

impl PcmDecoder {
    /// Create a new PCM decoder
    pub fn new(format: PcmFormat) -> Self {
        PcmDecoder { format }
    }

    /// Format the decoder was created with
    pub fn format(&self) -> &PcmFormat {
        &self.format
    }

    /// Decode a `data` payload
    pub fn decode(&self, data: &[u8]) -> DecodedAudio {
        if data.len() % BYTES_PER_SAMPLE != 0 {
            tracing::debug!("dropping trailing odd byte of {}-byte data chunk", data.len());
        }
        DecodedAudio::new(self.format, extract_samples(data))
    }
}
