//! Channel mixdown (interleaved i16 to mono f32)

use crate::error::{Error, Result};

/// Divisor used to normalize i16 samples
///
/// `i16::MIN` therefore maps slightly below -1.0.
pub const I16_FULL_SCALE: f32 = i16::MAX as f32;

/// Mix interleaved samples down to a single normalized channel
///
/// Mono samples are divided by [`I16_FULL_SCALE`]. Stereo pairs are averaged
/// as integers, `(left + right) / 2`, before normalization. The output has
/// `floor(len / channels)` values; an incomplete trailing frame is dropped.
pub fn to_mono(samples: &[i16], channels: u16) -> Result<Vec<f32>> {
    match channels {
        1 => Ok(samples
            .iter()
            .map(|&s| f32::from(s) / I16_FULL_SCALE)
            .collect()),
        2 => Ok(samples
            .chunks_exact(2)
            .map(|pair| {
                let sum = i32::from(pair[0]) + i32::from(pair[1]);
                sum as f32 / 2.0 / I16_FULL_SCALE
            })
            .collect()),
        _ => Err(Error::UnsupportedChannelCount {
            channels,
            offset: None,
        }),
    }
}
