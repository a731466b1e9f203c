//! Peak-amplitude waveform summaries
//!
//! A mono signal of any length is split into `width` equal buckets and each
//! bucket is represented by its largest absolute sample. The result is meant
//! to be drawn one column per bucket, as a bar of half-height
//! `amplitude * surface_height / 2` centred on the vertical midline.
//!
//! ```rust
//! use wavpeek_lib::filter::waveform::{summarize, WaveformOptions};
//!
//! let mono = [0.1, 0.9, 0.3, 0.2, 0.05, -0.95, 0.0, 0.4];
//! let summary = summarize(&mono, 4, WaveformOptions::default());
//! assert_eq!(summary.amplitudes, vec![0.9, 0.3, 0.95, 0.4]);
//! ```

use serde::Serialize;

/// Reduction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformOptions {
    /// Clamp amplitudes to `[0.0, 1.0]`
    ///
    /// A full-scale negative sample (`i16::MIN`) normalizes to about
    /// 1.0000305; with clamping off that overshoot is kept.
    pub clamp: bool,
}

impl Default for WaveformOptions {
    fn default() -> Self {
        Self { clamp: true }
    }
}

/// Fixed-width peak summary of a signal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformSummary {
    /// One peak per bucket, in bucket order
    pub amplitudes: Vec<f32>,
}

impl WaveformSummary {
    /// Number of buckets
    pub fn width(&self) -> usize {
        self.amplitudes.len()
    }

    /// Largest bucket value, 0.0 for silence
    pub fn peak(&self) -> f32 {
        self.amplitudes.iter().copied().fold(0.0f32, f32::max)
    }

    /// Vertical extent `(top, bottom)` of the bar for bucket `x` on a
    /// surface `height` units tall, or `None` past the last bucket
    pub fn bar_extent(&self, x: usize, height: f32) -> Option<(f32, f32)> {
        let mid = height / 2.0;
        let amp = self.amplitudes.get(x)? * mid;
        Some((mid - amp, mid + amp))
    }
}

/// Effective bucket count and bucket size for a signal of `len` samples
///
/// Returns `(max(width, 1), max(len / width, 1))`.
pub fn bucket_layout(len: usize, width: i32) -> (usize, usize) {
    let width = width.max(1) as usize;
    let per_bucket = (len / width).max(1);
    (width, per_bucket)
}

/// Reduce a mono signal to `max(width, 1)` peak values
///
/// Bucket `x` covers `[x * n, min(x * n + n, len))` where `n` is the bucket
/// size from [`bucket_layout`]. Buckets past the end of the signal are 0.0.
/// Samples past `width * n` are not visited.
pub fn summarize(mono: &[f32], width: i32, options: WaveformOptions) -> WaveformSummary {
    let (width, per_bucket) = bucket_layout(mono.len(), width);

    let amplitudes = (0..width)
        .map(|x| {
            let start = (x * per_bucket).min(mono.len());
            let end = (start + per_bucket).min(mono.len());
            let peak = mono[start..end]
                .iter()
                .map(|s| s.abs())
                .fold(0.0f32, f32::max);
            if options.clamp {
                peak.min(1.0)
            } else {
                peak
            }
        })
        .collect();

    WaveformSummary { amplitudes }
}
