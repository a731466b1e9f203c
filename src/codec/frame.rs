//! Decoded audio representation

use crate::error::Result;
use crate::filter::{mixdown, waveform, WaveformOptions, WaveformSummary};
use crate::format::PcmFormat;

/// A fully decoded 16-bit PCM file
///
/// Owns its sample buffer. Stereo samples are interleaved (L, R, L, R, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Validated format descriptor
    pub format: PcmFormat,

    /// Raw samples, interleaved if stereo
    pub samples: Vec<i16>,
}

impl DecodedAudio {
    /// Create decoded audio from a format and its samples
    pub fn new(format: PcmFormat, samples: Vec<i16>) -> Self {
        DecodedAudio { format, samples }
    }

    /// Number of sample frames (one sample per channel)
    pub fn frame_count(&self) -> usize {
        match self.format.channels {
            0 => 0,
            channels => self.samples.len() / channels as usize,
        }
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.format.sample_rate as f64
    }

    /// Raw payload size in bytes
    pub fn data_size(&self) -> usize {
        self.samples.len() * crate::codec::pcm::BYTES_PER_SAMPLE
    }

    /// Mix down to a single normalized channel
    pub fn to_mono(&self) -> Result<Vec<f32>> {
        mixdown::to_mono(&self.samples, u16::from(self.format.channels))
    }

    /// Compute a peak-amplitude summary `width` buckets wide
    pub fn waveform(&self, width: i32, options: WaveformOptions) -> Result<WaveformSummary> {
        let mono = self.to_mono()?;
        Ok(waveform::summarize(&mono, width, options))
    }
}
