//! WAV `fmt ` chunk parsing

use super::chunk::RiffChunk;
use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::fmt;

/// Minimum size of a PCM `fmt ` payload
pub const PCM_FORMAT_SIZE: usize = 16;

/// The only supported sample width
pub const SUPPORTED_BITS_PER_SAMPLE: u16 = 16;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// A-Law
    ALaw,
    /// Mu-Law
    MuLaw,
    /// Extensible format
    Extensible,
    /// Unknown format
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatTag::Pcm => write!(f, "PCM"),
            FormatTag::IeeeFloat => write!(f, "IEEE float"),
            FormatTag::ALaw => write!(f, "A-law"),
            FormatTag::MuLaw => write!(f, "mu-law"),
            FormatTag::Extensible => write!(f, "extensible"),
            FormatTag::Unknown(val) => write!(f, "unknown ({:#06x})", val),
        }
    }
}

/// Validated 16-bit PCM format descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PcmFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u8,
    /// Bits per sample, always 16
    pub bits_per_sample: u8,
    /// Audio format tag, always 1 (PCM)
    pub format_tag: u16,
}

impl PcmFormat {
    /// Parse and validate a `fmt ` chunk payload
    ///
    /// Only the first 16 bytes are read. The byte rate and block align
    /// fields are not trusted; they are derived from the other fields when
    /// needed. Checks run in order: format tag, bit depth, channel count.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < PCM_FORMAT_SIZE {
            return Err(Error::FmtChunkTooSmall {
                size: data.len(),
                offset: None,
            });
        }

        let format_tag = LittleEndian::read_u16(&data[0..2]);
        let channels = LittleEndian::read_u16(&data[2..4]);
        let sample_rate = LittleEndian::read_u32(&data[4..8]);
        // data[8..12] byte rate, data[12..14] block align
        let bits_per_sample = LittleEndian::read_u16(&data[14..16]);

        let tag = FormatTag::from(format_tag);
        if tag != FormatTag::Pcm {
            tracing::debug!("rejecting {} format chunk", tag);
            return Err(Error::UnsupportedFormat {
                tag: format_tag,
                offset: None,
            });
        }

        if bits_per_sample != SUPPORTED_BITS_PER_SAMPLE {
            return Err(Error::UnsupportedBitDepth {
                bits: bits_per_sample,
                offset: None,
            });
        }

        if !(1..=2).contains(&channels) {
            return Err(Error::UnsupportedChannelCount {
                channels,
                offset: None,
            });
        }

        Ok(PcmFormat {
            sample_rate,
            channels: channels as u8,
            bits_per_sample: bits_per_sample as u8,
            format_tag,
        })
    }

    /// Parse a `fmt ` chunk, tagging any failure with the chunk's offset
    pub fn from_chunk(chunk: &RiffChunk<'_>) -> Result<Self> {
        Self::from_bytes(chunk.payload).map_err(|e| e.at_fmt_offset(chunk.offset))
    }

    /// Format tag as an enum
    pub fn tag(&self) -> FormatTag {
        FormatTag::from(self.format_tag)
    }

    /// Whether the stream carries two interleaved channels
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Bytes per sample frame (all channels)
    pub fn block_align(&self) -> u16 {
        u16::from(self.channels) * (u16::from(self.bits_per_sample) / 8)
    }

    /// Average bytes per second
    ///
    /// Widened to u64: any u32 sample rate is accepted.
    pub fn byte_rate(&self) -> u64 {
        u64::from(self.sample_rate) * u64::from(self.block_align())
    }
}

impl fmt::Display for PcmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-bit {} Hz {}",
            self.tag(),
            self.bits_per_sample,
            self.sample_rate,
            if self.is_stereo() { "stereo" } else { "mono" }
        )
    }
}
